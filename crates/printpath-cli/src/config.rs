//! Print configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use printpath_gcode::{ExtrusionParams, GcodeSettings, MachineBlocks};
use serde::{Deserialize, Serialize};

/// Contents of a `print.toml` file.
///
/// Every key is optional. Missing scalar values fall back to
/// [`GcodeSettings::default`], missing blocks to the built-in Prusa MK3S ones.
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintConfig {
    pub travel_feed_rate: f64,
    pub extrusion_feed_rate: f64,
    pub layer_height: f64,
    pub extrusion_width: f64,
    pub filament_diameter: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_gcode: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_gcode: Option<Vec<String>>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        let defaults = GcodeSettings::default();
        Self {
            travel_feed_rate: defaults.travel_feed_rate,
            extrusion_feed_rate: defaults.extrusion_feed_rate,
            layer_height: defaults.extrusion.layer_height,
            extrusion_width: defaults.extrusion.extrusion_width,
            filament_diameter: defaults.extrusion.filament_diameter,
            start_gcode: None,
            end_gcode: None,
        }
    }
}

impl PrintConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: PrintConfig = toml::from_str(text)?;
        config.settings().validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn settings(&self) -> GcodeSettings {
        GcodeSettings::new(
            self.travel_feed_rate,
            self.extrusion_feed_rate,
            ExtrusionParams {
                layer_height: self.layer_height,
                extrusion_width: self.extrusion_width,
                filament_diameter: self.filament_diameter,
            },
        )
    }

    pub fn blocks(&self) -> MachineBlocks {
        let mut blocks = MachineBlocks::prusa_mk3s();
        if let Some(start) = &self.start_gcode {
            blocks = blocks.with_start(start.clone());
        }
        if let Some(end) = &self.end_gcode {
            blocks = blocks.with_end(end.clone());
        }
        blocks
    }
}
