//! Start-up configuration: surface size in pixels and cell size.

use std::num::IntErrorKind;

use crate::error::{ConfigError, Result};

/// Exit code drivers use for usage and configuration errors.
pub const USAGE_EXIT_CODE: i32 = 84;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_CELL_SIZE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Side of one cell in pixels
    pub cell_size: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Fails if the cell size is zero or the surface holds no whole cell.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.width < self.cell_size || self.height < self.cell_size {
            return Err(ConfigError::SurfaceTooSmall {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// Grid size in cells. Zero cell size yields an empty grid.
    #[must_use]
    pub fn grid_dimensions(&self) -> (usize, usize) {
        match self.cell_size {
            0 => (0, 0),
            size => ((self.width / size) as usize, (self.height / size) as usize),
        }
    }
}

/// Parse a pixel dimension supplied by the operator.
///
/// # Errors
///
/// Rejects anything that is not a non-negative integer.
pub fn parse_dimension(input: &str) -> Result<u32> {
    match input.trim().parse::<i64>() {
        Ok(n) if n < 0 => Err(ConfigError::Negative(input.to_owned())),
        Ok(n) => u32::try_from(n).map_err(|_| ConfigError::TooLarge(input.to_owned())),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
            Err(ConfigError::TooLarge(input.to_owned()))
        }
        Err(e) if matches!(e.kind(), IntErrorKind::NegOverflow) => {
            Err(ConfigError::Negative(input.to_owned()))
        }
        Err(_) => Err(ConfigError::NotAnInteger(input.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_window_size() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height, config.cell_size), (800, 800, 5));
        assert_eq!(config.grid_dimensions(), (160, 160));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn parse_dimension_accepts_non_negative_integers() {
        assert_eq!(parse_dimension("640"), Ok(640));
        assert_eq!(parse_dimension(" 12 "), Ok(12));
        assert_eq!(parse_dimension("0"), Ok(0));
    }

    #[test]
    fn parse_dimension_rejects_bad_input() {
        assert_eq!(
            parse_dimension("abc"),
            Err(ConfigError::NotAnInteger("abc".into()))
        );
        assert_eq!(
            parse_dimension("12.5"),
            Err(ConfigError::NotAnInteger("12.5".into()))
        );
        assert_eq!(parse_dimension("-3"), Err(ConfigError::Negative("-3".into())));
        assert_eq!(
            parse_dimension("99999999999"),
            Err(ConfigError::TooLarge("99999999999".into()))
        );
        assert_eq!(
            parse_dimension("").unwrap_err().to_string(),
            " isn't an integer"
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::NotAnInteger("x".into()).to_string(),
            "x isn't an integer"
        );
        assert_eq!(ConfigError::Negative("-1".into()).to_string(), "-1 isn't positive");
    }

    #[test]
    fn validate_rejects_empty_grids() {
        assert_eq!(
            SimConfig::new(4, 800).validate(),
            Err(ConfigError::SurfaceTooSmall {
                width: 4,
                height: 800,
                cell_size: 5
            })
        );
        let zero = SimConfig {
            cell_size: 0,
            ..SimConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroCellSize));
        assert_eq!(zero.grid_dimensions(), (0, 0));
    }
}
