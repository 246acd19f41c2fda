//! Fixed machine start/end blocks.
//!
//! These lines are passed through verbatim. The generator never looks
//! inside them.

use serde::{Deserialize, Serialize};

/// Prusa MK3S start sequence: limits, heat-up, homing, mesh leveling and
/// purge line.
pub const PRUSA_MK3S_START: &[&str] = &[
    ";START GCODE",
    "M73 P0 R42",
    "M73 Q0 S43",
    "M201 X1000 Y1000 Z200 E5000 ; sets maximum accelerations, mm/sec^2",
    "M203 X200 Y200 Z12 E120 ; sets maximum feedrates, mm / sec",
    "M204 S1250 T1250 ; sets acceleration (S) and retract acceleration (R), mm/sec^2",
    "M205 X8.00 Y8.00 Z0.40 E4.50 ; sets the jerk limits, mm/sec",
    "M205 S0 T0 ; sets the minimum extruding and travel feed rate, mm/sec",
    ";TYPE:Custom",
    "M862.3 P \"MK3S\" ; printer model check",
    "M862.1 P0.4 ; nozzle diameter check",
    "M115 U3.13.1 ; tell printer latest fw version",
    "G90 ; use absolute coordinates",
    "M83 ; extruder relative mode",
    "M104 S215 ; set extruder temp",
    "M140 S60 ; set bed temp",
    "M190 S60 ; wait for bed temp",
    "M109 S215 ; wait for extruder temp",
    "G28 W ; home all without mesh bed level",
    "G80 ; mesh bed leveling",
    "G1 Z0.2 F720",
    "G1 Y-3 F1000 ; go outside print area",
    "G92 E0",
    "G1 X60 E9 F1000 ; intro line",
    "G1 X100 E12.5 F1000 ; intro line",
    "G92 E0",
    "M221 S95",
    "; Don't change E values below. Excessive value can damage the printer.",
    "M907 E538 ; set extruder motor current",
    "G21 ; set units to millimeters",
    "G90 ; use absolute coordinates",
    "M83 ; use relative distances for extrusion",
    "M900 K0.05 ; Filament gcode LA 1.5",
    "M900 K30 ; Filament gcode LA 1.0",
    "M107",
];

/// Prusa MK3S end sequence: lift, park, reset and power down.
pub const PRUSA_MK3S_END: &[&str] = &[
    "; END Gcode",
    "M204 S1000",
    "M107",
    ";TYPE:Custom",
    "; Filament-specific end gcode",
    "G1 Z100 F720 ; Move print head further up",
    "G1 X0 Y200 F3600 ; park",
    "G4 ; wait",
    "M221 S100 ; reset flow",
    "M900 K0 ; reset LA",
    "M104 S0 ; turn off temperature",
    "M140 S0 ; turn off heatbed",
    "M107 ; turn off fan",
    "M84 ; disable motors",
];

/// Start and end blocks wrapped around a generated body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineBlocks {
    /// Lines emitted before the body.
    pub start: Vec<String>,
    /// Lines emitted after the body.
    pub end: Vec<String>,
}

impl Default for MachineBlocks {
    fn default() -> Self {
        Self::prusa_mk3s()
    }
}

impl MachineBlocks {
    /// Blocks from arbitrary lines.
    pub fn new(start: Vec<String>, end: Vec<String>) -> Self {
        Self { start, end }
    }

    /// Prusa MK3S blocks (PLA at 215/60 °C, relative extrusion).
    pub fn prusa_mk3s() -> Self {
        Self {
            start: PRUSA_MK3S_START.iter().map(|s| s.to_string()).collect(),
            end: PRUSA_MK3S_END.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// No start or end lines; the document is the body alone.
    pub fn empty() -> Self {
        Self {
            start: Vec::new(),
            end: Vec::new(),
        }
    }

    /// Replace the start block, keeping the end block.
    pub fn with_start(mut self, start: Vec<String>) -> Self {
        self.start = start;
        self
    }

    /// Replace the end block, keeping the start block.
    pub fn with_end(mut self, end: Vec<String>) -> Self {
        self.end = end;
        self
    }
}
