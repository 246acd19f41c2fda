//! Generation settings.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, Result};
use crate::extrusion::ExtrusionParams;

/// Feed rates and bead geometry for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeSettings {
    /// Feed rate for non-printing moves (mm/min).
    pub travel_feed_rate: f64,
    /// Feed rate for printing moves (mm/min).
    pub extrusion_feed_rate: f64,
    /// Bead and filament dimensions.
    #[serde(flatten)]
    pub extrusion: ExtrusionParams,
}

impl Default for GcodeSettings {
    fn default() -> Self {
        Self {
            travel_feed_rate: 3000.0,
            extrusion_feed_rate: 1200.0,
            extrusion: ExtrusionParams::default(),
        }
    }
}

impl GcodeSettings {
    /// Settings from the five scalar parameters.
    pub fn new(
        travel_feed_rate: f64,
        extrusion_feed_rate: f64,
        extrusion: ExtrusionParams,
    ) -> Self {
        Self {
            travel_feed_rate,
            extrusion_feed_rate,
            extrusion,
        }
    }

    /// Validate settings.
    ///
    /// Every value must be finite and strictly positive; the error names the
    /// first offending parameter.
    pub fn validate(&self) -> Result<()> {
        require_positive("travel_feed_rate", self.travel_feed_rate)?;
        require_positive("extrusion_feed_rate", self.extrusion_feed_rate)?;
        self.extrusion.validate()
    }
}
