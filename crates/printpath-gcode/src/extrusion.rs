//! Filament extrusion model.
//!
//! The volume deposited by a segment is modelled as a rectangular bead
//! (`length * layer_height * extrusion_width`). Dividing by the filament
//! cross-section gives the length of filament that must be pushed through
//! the hot end.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, GcodeError, Result};

/// Cross-section parameters of the deposited bead and the filament feeding it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionParams {
    /// Layer height (mm).
    pub layer_height: f64,
    /// Extrusion line width (mm).
    pub extrusion_width: f64,
    /// Filament diameter (mm).
    pub filament_diameter: f64,
}

impl Default for ExtrusionParams {
    fn default() -> Self {
        Self {
            layer_height: 0.2,
            extrusion_width: 0.4,
            filament_diameter: 1.75,
        }
    }
}

impl ExtrusionParams {
    /// Validate that every dimension is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        require_positive("layer_height", self.layer_height)?;
        require_positive("extrusion_width", self.extrusion_width)?;
        require_positive("filament_diameter", self.filament_diameter)?;
        Ok(())
    }

    /// Filament length needed to print `segment_length` mm with these parameters.
    pub fn extrusion_for(&self, segment_length: f64) -> Result<f64> {
        extrusion_length(
            segment_length,
            self.layer_height,
            self.extrusion_width,
            self.filament_diameter,
        )
    }
}

/// Cross-section area of filament with the given diameter (mm²).
pub fn filament_area(filament_diameter: f64) -> f64 {
    PI * (filament_diameter / 2.0).powi(2)
}

/// Filament length (mm) required to deposit a bead of the given length.
///
/// Fails with [`GcodeError::InvalidParameter`] when the filament diameter is
/// zero, negative or not finite.
pub fn extrusion_length(
    segment_length: f64,
    layer_height: f64,
    extrusion_width: f64,
    filament_diameter: f64,
) -> Result<f64> {
    if !filament_diameter.is_finite() || filament_diameter <= 0.0 {
        return Err(GcodeError::invalid(
            "filament_diameter",
            filament_diameter,
            "must be positive",
        ));
    }
    if segment_length == 0.0 {
        return Ok(0.0);
    }
    let volume = segment_length * layer_height * extrusion_width;
    Ok(volume / filament_area(filament_diameter))
}

/// Volume (mm³) of a given length of filament.
pub fn filament_volume_mm3(filament_length: f64, filament_diameter: f64) -> f64 {
    filament_length * filament_area(filament_diameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_segment() {
        let e = extrusion_length(10.0, 0.2, 0.4, 1.75).unwrap();
        assert_relative_eq!(e, 0.8 / (PI * 0.875 * 0.875), epsilon = 1e-12);
        assert_eq!(format!("{:.3}", e), "0.333");
    }

    #[test]
    fn test_zero_length_is_exactly_zero() {
        for (h, w, d) in [(0.2, 0.4, 1.75), (0.1, 0.6, 2.85), (0.3, 0.45, 1.0)] {
            assert_eq!(extrusion_length(0.0, h, w, d).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let err = extrusion_length(10.0, 0.2, 0.4, 0.0).unwrap_err();
        assert!(matches!(
            err,
            GcodeError::InvalidParameter { ref name, .. } if name == "filament_diameter"
        ));
        assert!(extrusion_length(10.0, 0.2, 0.4, -1.75).is_err());
        // Zero length does not excuse a bad diameter.
        assert!(extrusion_length(0.0, 0.2, 0.4, 0.0).is_err());
    }

    #[test]
    fn test_strictly_increasing_in_length() {
        let mut previous = extrusion_length(0.0, 0.2, 0.4, 1.75).unwrap();
        for i in 1..50 {
            let current = extrusion_length(i as f64 * 0.5, 0.2, 0.4, 1.75).unwrap();
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_monotonic_in_bead_and_filament() {
        let base = extrusion_length(10.0, 0.2, 0.4, 1.75).unwrap();
        assert!(extrusion_length(10.0, 0.3, 0.4, 1.75).unwrap() >= base);
        assert!(extrusion_length(10.0, 0.2, 0.5, 1.75).unwrap() >= base);
        assert!(extrusion_length(10.0, 0.2, 0.4, 2.85).unwrap() <= base);
    }

    #[test]
    fn test_params_validate() {
        assert!(ExtrusionParams::default().validate().is_ok());
        let bad = ExtrusionParams {
            extrusion_width: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_volume_round_trip() {
        let params = ExtrusionParams::default();
        let e = params.extrusion_for(25.0).unwrap();
        assert_relative_eq!(
            filament_volume_mm3(e, params.filament_diameter),
            25.0 * 0.2 * 0.4,
            epsilon = 1e-9
        );
    }
}
