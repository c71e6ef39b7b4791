//! Configuration surface of the stress layout.

use crate::error::{Error, Result};

/// Movement restriction for the majorization sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// Update both coordinates.
    #[default]
    XY,
    /// Update x only; y coordinates pass through unchanged.
    X,
    /// Update y only; x coordinates pass through unchanged.
    Y,
}

#[derive(Debug, Clone)]
pub struct StressOptions {
    /// Target Euclidean length for edges that carry no per-edge override.
    pub desired_edge_length: f64,
    /// Termination threshold on the relative stress improvement per sweep.
    /// Values `<= 0` disable this criterion; the run then terminates on the
    /// iteration limit alone.
    pub epsilon: f64,
    /// Hard cap on majorization sweeps per component, the termination
    /// backstop. `0` is clamped to `1`.
    pub iteration_limit: usize,
    pub dimension: Dimension,
    /// Lay out each connected component on its own and pack the results
    /// afterwards. When off, the input is handed to the solver as a whole and
    /// must be connected.
    pub separate_components: bool,
    /// Width-to-height ratio the packed drawing aims for.
    pub aspect_ratio: f64,
    /// Gap between the bounding boxes of packed components.
    pub component_spacing: f64,
}

impl Default for StressOptions {
    fn default() -> Self {
        Self {
            desired_edge_length: 100.0,
            epsilon: 1e-3,
            iteration_limit: 300,
            dimension: Dimension::XY,
            separate_components: true,
            aspect_ratio: 1.6,
            component_spacing: 80.0,
        }
    }
}

impl StressOptions {
    /// Rejects configurations the solver would divide by zero on.
    pub fn validate(&self) -> Result<()> {
        if !(self.desired_edge_length > 0.0) || !self.desired_edge_length.is_finite() {
            return Err(Error::InvalidConfiguration {
                reason: format!(
                    "desired edge length must be positive and finite, got {}",
                    self.desired_edge_length
                ),
            });
        }
        Ok(())
    }

    /// The iteration limit with the defensive lower bound applied.
    pub(crate) fn iteration_limit_clamped(&self) -> usize {
        self.iteration_limit.max(1)
    }
}
