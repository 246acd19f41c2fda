#![warn(missing_docs)]

//! Toolpath to G-code translation for FDM printers.
//!
//! This crate turns an ordered sequence of segments into `G1` motion
//! commands. It tracks the simulated head position, writes only the axes
//! that change, computes the filament needed for each segment and wraps the
//! result in fixed machine start/end blocks.
//!
//! # Example
//!
//! ```
//! use printpath_gcode::{generate, ExtrusionParams, Segment};
//! use printpath_math::Point3;
//!
//! let segments = [Segment::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     10.0,
//! )];
//! let commands = generate(&segments, 3000.0, 1200.0, ExtrusionParams::default())?;
//! assert_eq!(commands[0].to_string(), "G1 X10.000 F1200.000 E0.333");
//! # Ok::<(), printpath_gcode::GcodeError>(())
//! ```

pub mod blocks;
pub mod command;
pub mod document;
pub mod error;
pub mod extrusion;
pub mod generator;
pub mod geometry;
pub mod input;
pub mod settings;

pub use blocks::MachineBlocks;
pub use command::{build_move, build_move_with, Extrusion, MoveCommand, Param, ParamLetter};
pub use document::assemble;
pub use error::{GcodeError, GeometryField, Result};
pub use extrusion::{extrusion_length, ExtrusionParams};
pub use generator::{generate, Program, ProgramStats, ToolpathGenerator, ToolpathState};
pub use geometry::{GeometryProvider, Line, RawSegment, Segment};
pub use input::parse_segments;
pub use settings::GcodeSettings;
