//! Engine constants: display width, spacing, row bounds, and balance targets.

use crate::error::ConfigError;

/// Width of the photo column in the chat view, in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 320;

/// Layout configuration.
///
/// # Example
///
/// ```
/// use albumlayout::AlbumConfig;
///
/// let config = AlbumConfig::new(480).with_spacing(4).row_heights(80, 400);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlbumConfig {
    /// Width of the display column. Every multi-item layout fills it exactly.
    pub max_width: u32,
    /// Gap between adjacent tiles, horizontally and vertically.
    pub spacing: u32,
    /// Lower bound on a balanced row's height (generic case only).
    pub min_row_height: u32,
    /// Upper bound on a balanced row's height; also caps a single item's height.
    pub max_row_height: u32,
    /// Most tiles the generic row balancer may place in one row.
    pub max_per_row: usize,
    /// Lower edge of the "balanced" aggregate aspect ratio window.
    pub min_balanced_ratio: f64,
    /// Upper edge of the "balanced" aggregate aspect ratio window.
    pub max_balanced_ratio: f64,
    /// Factor by which the balanced window is widened for the pass/fail test
    /// of the 2- and 4-item conventions.
    pub balance_tolerance: f64,
    /// Width/height a balanced generic row aims for.
    pub target_row_ratio: f64,
    /// Badness added to a generic row whose height leaves `[min, max]`.
    pub height_penalty: f64,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            spacing: 2,
            min_row_height: 60,
            max_row_height: 420,
            max_per_row: 3,
            min_balanced_ratio: 0.6,
            max_balanced_ratio: 1.2,
            balance_tolerance: 2.0,
            target_row_ratio: 2.5,
            height_penalty: 100.0,
        }
    }
}

impl AlbumConfig {
    /// Default configuration for the given display width.
    pub fn new(max_width: u32) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    /// Set the gap between tiles.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the `[min, max]` row height bounds.
    pub fn row_heights(mut self, min: u32, max: u32) -> Self {
        self.min_row_height = min;
        self.max_row_height = max;
        self
    }

    /// Set the most tiles per generic row.
    pub fn max_per_row(mut self, k: usize) -> Self {
        self.max_per_row = k;
        self
    }

    /// Set the balanced aggregate ratio window.
    pub fn balanced_window(mut self, min: f64, max: f64) -> Self {
        self.min_balanced_ratio = min;
        self.max_balanced_ratio = max;
        self
    }

    /// Set the pass/fail widening factor for the balance test.
    pub fn balance_tolerance(mut self, tolerance: f64) -> Self {
        self.balance_tolerance = tolerance;
        self
    }

    /// Set the target width/height of a generic row.
    pub fn target_row_ratio(mut self, ratio: f64) -> Self {
        self.target_row_ratio = ratio;
        self
    }

    /// Set the out-of-range row height penalty.
    pub fn height_penalty(mut self, penalty: f64) -> Self {
        self.height_penalty = penalty;
        self
    }

    /// Most tiles any layout may put side by side: the generic `K`, or three
    /// for the one-over-three convention.
    pub(crate) fn widest_row(&self) -> usize {
        self.max_per_row.max(3)
    }

    /// Check that the configuration can produce a valid layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == 0 {
            return Err(ConfigError::ZeroMaxWidth);
        }
        if self.max_row_height == 0 {
            return Err(ConfigError::ZeroMaxRowHeight);
        }
        if self.min_row_height > self.max_row_height {
            return Err(ConfigError::InvertedRowHeights {
                min: self.min_row_height,
                max: self.max_row_height,
            });
        }
        if self.max_per_row == 0 {
            return Err(ConfigError::ZeroItemsPerRow);
        }
        // Every tile of the widest row needs at least one pixel.
        let columns = self.widest_row();
        let needed = (columns as u64 - 1) * self.spacing as u64 + columns as u64;
        if (self.max_width as u64) < needed {
            return Err(ConfigError::TooNarrow {
                max_width: self.max_width,
                columns,
                spacing: self.spacing,
            });
        }
        let (lo, hi) = (self.min_balanced_ratio, self.max_balanced_ratio);
        if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || lo > hi {
            return Err(ConfigError::InvalidBalancedWindow);
        }
        if !self.balance_tolerance.is_finite() || self.balance_tolerance < 1.0 {
            return Err(ConfigError::InvalidBalanceTolerance);
        }
        if !self.target_row_ratio.is_finite() || self.target_row_ratio <= 0.0 {
            return Err(ConfigError::InvalidTargetRowRatio);
        }
        if !self.height_penalty.is_finite() || self.height_penalty < 0.0 {
            return Err(ConfigError::InvalidHeightPenalty);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(AlbumConfig::default().validate(), Ok(()));
        assert_eq!(AlbumConfig::default().max_width, DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn zero_width_rejected() {
        assert_eq!(
            AlbumConfig::new(0).validate(),
            Err(ConfigError::ZeroMaxWidth)
        );
    }

    #[test]
    fn inverted_heights_rejected() {
        assert_eq!(
            AlbumConfig::default().row_heights(500, 400).validate(),
            Err(ConfigError::InvertedRowHeights { min: 500, max: 400 })
        );
    }

    #[test]
    fn equal_heights_allowed() {
        assert_eq!(AlbumConfig::default().row_heights(100, 100).validate(), Ok(()));
    }

    #[test]
    fn zero_per_row_rejected() {
        assert_eq!(
            AlbumConfig::default().max_per_row(0).validate(),
            Err(ConfigError::ZeroItemsPerRow)
        );
    }

    #[test]
    fn too_narrow_for_spacing() {
        // Three tiles need 3 + 2 * 10 = 23 px.
        assert_eq!(AlbumConfig::new(23).with_spacing(10).validate(), Ok(()));
        assert_eq!(
            AlbumConfig::new(22).with_spacing(10).validate(),
            Err(ConfigError::TooNarrow {
                max_width: 22,
                columns: 3,
                spacing: 10
            })
        );
        // K above three widens the requirement.
        assert!(AlbumConfig::new(23).with_spacing(10).max_per_row(4).validate().is_err());
    }

    #[test]
    fn ratio_fields_checked() {
        let c = AlbumConfig::default();
        assert_eq!(
            c.balanced_window(1.5, 1.0).validate(),
            Err(ConfigError::InvalidBalancedWindow)
        );
        assert_eq!(
            c.balanced_window(f64::NAN, 1.0).validate(),
            Err(ConfigError::InvalidBalancedWindow)
        );
        assert_eq!(
            c.balance_tolerance(0.5).validate(),
            Err(ConfigError::InvalidBalanceTolerance)
        );
        assert_eq!(
            c.target_row_ratio(0.0).validate(),
            Err(ConfigError::InvalidTargetRowRatio)
        );
        assert_eq!(
            c.height_penalty(-1.0).validate(),
            Err(ConfigError::InvalidHeightPenalty)
        );
    }
}
