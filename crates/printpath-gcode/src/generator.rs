//! Toolpath to G-code translation.
//!
//! The generator walks the segments in order and keeps a simulated head
//! position. Each segment produces up to three commands:
//!
//! 1. a Z alignment travel when the segment is not level,
//! 2. a travel to the segment start when the head is elsewhere,
//! 3. the extrusion move itself.
//!
//! Non-level segments are printed flat at their start height.

use printpath_math::{Point3, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::blocks::MachineBlocks;
use crate::command::{build_move_with, Extrusion, MoveCommand};
use crate::document::assemble;
use crate::error::{GcodeError, GeometryField, Result};
use crate::extrusion::{filament_volume_mm3, ExtrusionParams};
use crate::geometry::{GeometryProvider, Segment};
use crate::settings::GcodeSettings;

/// Simulated machine state for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolpathState {
    current_position: Point3,
}

impl Default for ToolpathState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolpathState {
    /// State at the start of a run: head at the origin.
    pub fn new() -> Self {
        Self {
            current_position: Point3::origin(),
        }
    }

    /// Where the head is after the last emitted move.
    pub fn current_position(&self) -> Point3 {
        self.current_position
    }

    fn move_to(&mut self, position: Point3) {
        self.current_position = position;
    }
}

/// Counters collected while generating a program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramStats {
    /// Segments processed.
    pub segment_count: usize,
    /// Z alignment travels emitted for non-level segments.
    pub z_alignment_moves: usize,
    /// Travels to segment starts.
    pub travel_moves: usize,
    /// Extrusion moves.
    pub extrusion_moves: usize,
    /// Total filament pushed (mm).
    pub filament_mm: f64,
    /// Total filament volume (mm³).
    pub filament_volume_mm3: f64,
}

impl ProgramStats {
    /// Total number of emitted commands.
    pub fn command_count(&self) -> usize {
        self.z_alignment_moves + self.travel_moves + self.extrusion_moves
    }
}

/// Output of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Commands in emission order.
    pub commands: Vec<MoveCommand>,
    /// Run statistics.
    pub stats: ProgramStats,
}

impl Program {
    /// Body lines, one per command.
    pub fn lines(&self) -> Vec<String> {
        self.commands.iter().map(MoveCommand::to_string).collect()
    }

    /// Full document: start block, commands, end block.
    pub fn to_document(&self, blocks: &MachineBlocks) -> String {
        assemble(&blocks.start, &self.commands, &blocks.end)
    }
}

/// Translates segment sequences into move commands.
#[derive(Debug, Clone)]
pub struct ToolpathGenerator {
    settings: GcodeSettings,
    tolerance: Tolerance,
}

impl ToolpathGenerator {
    /// Create a generator with the default coordinate tolerance.
    pub fn new(settings: GcodeSettings) -> Self {
        Self {
            settings,
            tolerance: Tolerance::DEFAULT,
        }
    }

    /// Use a different coordinate tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Generate the move commands for `segments`.
    pub fn generate<G: GeometryProvider>(&self, segments: &[G]) -> Result<Vec<MoveCommand>> {
        self.generate_program(segments).map(|program| program.commands)
    }

    /// Generate commands and statistics for `segments`.
    ///
    /// Settings are validated before any segment is looked at. The first
    /// invalid segment aborts the run.
    pub fn generate_program<G: GeometryProvider>(&self, segments: &[G]) -> Result<Program> {
        self.settings.validate()?;

        let mut state = ToolpathState::new();
        let mut program = Program {
            commands: Vec::new(),
            stats: ProgramStats::default(),
        };

        for (index, provider) in segments.iter().enumerate() {
            let segment = resolve_segment(index, provider)?;
            self.emit_segment(index, &segment, &mut state, &mut program)?;
        }

        program.stats.segment_count = segments.len();
        program.stats.filament_volume_mm3 = filament_volume_mm3(
            program.stats.filament_mm,
            self.settings.extrusion.filament_diameter,
        );

        let end = state.current_position();
        info!(
            segments = program.stats.segment_count,
            commands = program.commands.len(),
            filament_mm = program.stats.filament_mm,
            end_x = end.x,
            end_y = end.y,
            end_z = end.z,
            "toolpath generated"
        );

        Ok(program)
    }

    fn emit_segment(
        &self,
        index: usize,
        segment: &Segment,
        state: &mut ToolpathState,
        program: &mut Program,
    ) -> Result<()> {
        let settings = &self.settings;
        let start = segment.start;
        let mut end = segment.end;

        // Aligned from the segment end, not the head position. The head
        // position is left untouched by this command.
        if !self.tolerance.scalars_equal(end.z, start.z) {
            let level = Point3::new(end.x, end.y, start.z);
            let cmd = build_move_with(
                &self.tolerance,
                &end,
                &level,
                Some(settings.travel_feed_rate),
                Extrusion::None,
            );
            debug!(segment = index, command = %cmd, "z alignment");
            program.commands.push(cmd);
            program.stats.z_alignment_moves += 1;
            end.z = start.z;
        }

        if !self.tolerance.points_equal(&state.current_position(), &start) {
            let cmd = build_move_with(
                &self.tolerance,
                &state.current_position(),
                &start,
                Some(settings.travel_feed_rate),
                Extrusion::None,
            );
            debug!(segment = index, command = %cmd, "travel");
            program.commands.push(cmd);
            program.stats.travel_moves += 1;
            state.move_to(start);
        }

        if segment.length == 0.0 {
            warn!(segment = index, "zero-length segment");
        }
        let amount = settings.extrusion.extrusion_for(segment.length)?;

        let cmd = build_move_with(
            &self.tolerance,
            &start,
            &end,
            Some(settings.extrusion_feed_rate),
            Extrusion::Amount(amount),
        );
        debug!(segment = index, command = %cmd, "extrude");
        program.commands.push(cmd);
        program.stats.extrusion_moves += 1;
        program.stats.filament_mm += amount;
        state.move_to(end);

        Ok(())
    }
}

/// Pull a complete segment out of a provider.
fn resolve_segment<G: GeometryProvider>(index: usize, provider: &G) -> Result<Segment> {
    let missing = |field| GcodeError::MissingGeometryData { index, field };
    let start = provider.start_point().ok_or_else(|| missing(GeometryField::Start))?;
    let end = provider.end_point().ok_or_else(|| missing(GeometryField::End))?;
    let length = provider.length().ok_or_else(|| missing(GeometryField::Length))?;

    if !length.is_finite() || length < 0.0 {
        return Err(GcodeError::invalid(
            format!("segments[{}].length", index),
            length,
            "must be finite and non-negative",
        ));
    }

    Ok(Segment { start, end, length })
}

/// Generate move commands for `segments` with the given parameters.
pub fn generate<G: GeometryProvider>(
    segments: &[G],
    travel_feed_rate: f64,
    extrusion_feed_rate: f64,
    params: ExtrusionParams,
) -> Result<Vec<MoveCommand>> {
    let settings = GcodeSettings::new(travel_feed_rate, extrusion_feed_rate, params);
    ToolpathGenerator::new(settings).generate(segments)
}
