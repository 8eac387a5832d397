//! Terrain generation parameters

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Parameters controlling terrain generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Grid subdivisions per axis; must be a power of two
    pub div: u32,
    /// Minimum x of the domain rectangle
    pub min_x: f32,
    /// Maximum x of the domain rectangle
    pub max_x: f32,
    /// Minimum y of the domain rectangle
    pub min_y: f32,
    /// Maximum y of the domain rectangle
    pub max_y: f32,
    /// Perturbation coefficient (larger = more jagged)
    pub roughness: f32,
    /// Random seed for height synthesis
    pub seed: u64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            div: 64,
            min_x: -1.0,
            max_x: 1.0,
            min_y: -1.0,
            max_y: 1.0,
            roughness: 0.005,
            seed: 12345,
        }
    }
}

impl TerrainParams {
    /// Check parameters before any buffer is allocated.
    ///
    /// The diamond/square traversal only lands on every lattice point when
    /// repeated halving of `div` terminates exactly at step 1, so anything
    /// other than a power of two is rejected outright.
    pub fn validate(&self) -> Result<()> {
        if self.div == 0 {
            return Err(Error::InvalidParameter("div must be positive".into()));
        }
        if !self.div.is_power_of_two() {
            return Err(Error::InvalidParameter(format!(
                "div must be a power of two, got {}",
                self.div
            )));
        }
        if self.min_x >= self.max_x {
            return Err(Error::InvalidParameter(format!(
                "empty x domain: [{}, {}]",
                self.min_x, self.max_x
            )));
        }
        if self.min_y >= self.max_y {
            return Err(Error::InvalidParameter(format!(
                "empty y domain: [{}, {}]",
                self.min_y, self.max_y
            )));
        }
        if !self.roughness.is_finite() || self.roughness < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "roughness must be finite and non-negative, got {}",
                self.roughness
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_valid() {
        let params = TerrainParams::default();
        assert_eq!(params.div, 64);
        assert_eq!(params.roughness, 0.005);
        assert_eq!(params.seed, 12345);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_div_rejected() {
        let params = TerrainParams { div: 0, ..Default::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_non_power_of_two_div_rejected() {
        for div in [3, 6, 12, 100] {
            let params = TerrainParams { div, ..Default::default() };
            assert!(
                matches!(params.validate(), Err(Error::InvalidParameter(_))),
                "div {} should be rejected",
                div
            );
        }
    }

    #[test]
    fn test_power_of_two_div_accepted() {
        for div in [1, 2, 4, 64, 256] {
            let params = TerrainParams { div, ..Default::default() };
            assert!(params.validate().is_ok(), "div {} should be accepted", div);
        }
    }

    #[test]
    fn test_inverted_domain_rejected() {
        let params = TerrainParams { min_x: 1.0, max_x: -1.0, ..Default::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidParameter(_))));

        let params = TerrainParams { min_y: 0.0, max_y: 0.0, ..Default::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_bad_roughness_rejected() {
        let params = TerrainParams { roughness: -0.1, ..Default::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidParameter(_))));

        let params = TerrainParams { roughness: f32::NAN, ..Default::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidParameter(_))));
    }
}
