//! Error taxonomy for layout computation.

use thiserror::Error;

use crate::media::ItemId;

/// The item sequence cannot be laid out.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("album has no items")]
    Empty,
    #[error("item {id} at index {index} has a zero dimension ({width}x{height})")]
    ZeroDimension {
        index: usize,
        id: ItemId,
        width: u32,
        height: u32,
    },
    #[error("item {id} appears more than once")]
    DuplicateId { id: ItemId },
}

/// The configuration is unusable. Always a caller bug; never clamped.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max width must be positive")]
    ZeroMaxWidth,
    #[error("max row height must be positive")]
    ZeroMaxRowHeight,
    #[error("min row height {min} exceeds max row height {max}")]
    InvertedRowHeights { min: u32, max: u32 },
    #[error("at least one item per row is required")]
    ZeroItemsPerRow,
    #[error("max width {max_width} leaves no room for {columns} tiles with {spacing}px spacing")]
    TooNarrow {
        max_width: u32,
        columns: usize,
        spacing: u32,
    },
    #[error("balanced ratio window is empty or not finite")]
    InvalidBalancedWindow,
    #[error("balance tolerance must be finite and at least 1")]
    InvalidBalanceTolerance,
    #[error("target row ratio must be finite and positive")]
    InvalidTargetRowRatio,
    #[error("height penalty must be finite and non-negative")]
    InvalidHeightPenalty,
}

/// Layout computation error.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlbumError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl AlbumError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = AlbumError::from(InputError::ZeroDimension {
            index: 2,
            id: ItemId(7),
            width: 10,
            height: 0,
        });
        assert_eq!(
            e.to_string(),
            "invalid input: item #7 at index 2 has a zero dimension (10x0)"
        );
        assert!(e.is_invalid_input());

        let e = AlbumError::from(ConfigError::InvertedRowHeights { min: 500, max: 400 });
        assert_eq!(
            e.to_string(),
            "invalid config: min row height 500 exceeds max row height 400"
        );
        assert!(e.is_invalid_config());
    }
}
