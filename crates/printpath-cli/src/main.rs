//! printpath CLI - toolpath to G-code
//!
//! Reads a JSON segment file and a TOML print config, and writes a complete
//! G-code program.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use printpath_gcode::{parse_segments, Program, ToolpathGenerator};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
mod logging;

use config::PrintConfig;

#[derive(Parser)]
#[command(name = "printpath")]
#[command(about = "Generate printer G-code from toolpath segments", long_about = None)]
struct Cli {
    /// Log every emitted move
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a G-code program from a segment file
    Generate {
        /// JSON file with one segment or a list of segments
        segments: PathBuf,
        /// Print config (TOML). Defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write only the generated moves, without start/end blocks
        #[arg(long)]
        body_only: bool,
    },
    /// Print the built-in start and end blocks
    Blocks,
    /// Print the default config as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            segments,
            config,
            output,
            body_only,
        } => {
            let config = match config {
                Some(path) => PrintConfig::load(&path)?,
                None => PrintConfig::default(),
            };
            generate_file(&segments, &config, output.as_deref(), body_only)?;
        }
        Commands::Blocks => {
            let blocks = PrintConfig::default().blocks();
            println!("{}", blocks.start.join("\n"));
            println!("; ---- body ----");
            println!("{}", blocks.end.join("\n"));
        }
        Commands::Config => {
            print!("{}", PrintConfig::default().to_toml()?);
        }
    }

    Ok(())
}

fn generate_file(
    segments_path: &Path,
    config: &PrintConfig,
    output: Option<&Path>,
    body_only: bool,
) -> Result<()> {
    let json = fs::read_to_string(segments_path)
        .with_context(|| format!("reading segments {}", segments_path.display()))?;
    let (program, document) = render(&json, config, body_only)?;

    match output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote G-code");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", document)?;
        }
    }

    let stats = &program.stats;
    info!(
        segments = stats.segment_count,
        travel = stats.travel_moves,
        z_alignment = stats.z_alignment_moves,
        extrusion = stats.extrusion_moves,
        "filament {:.2} mm ({:.1} mm³)",
        stats.filament_mm,
        stats.filament_volume_mm3
    );
    Ok(())
}

/// Generate the program for `json` and render it as a document.
fn render(json: &str, config: &PrintConfig, body_only: bool) -> Result<(Program, String)> {
    let segments = parse_segments(json)?;
    let program = ToolpathGenerator::new(config.settings())
        .generate_program(&segments)
        .context("generating toolpath")?;

    let document = if body_only {
        program.lines().join("\n")
    } else {
        program.to_document(&config.blocks())
    };
    Ok((program, document))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SEGMENT: &str = r#"{"start": [0, 0, 0], "end": [10, 0, 0], "length": 10}"#;

    fn body_config() -> PrintConfig {
        PrintConfig::from_toml(
            r#"
            start_gcode = ["START"]
            end_gcode = ["END"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_document() {
        let (_, document) = render(ONE_SEGMENT, &body_config(), false).unwrap();
        assert_eq!(document, "START\nG1 X10.000 F1200.000 E0.333\nEND");
    }

    #[test]
    fn test_render_body_only() {
        let (program, document) = render(ONE_SEGMENT, &PrintConfig::default(), true).unwrap();
        assert_eq!(document, "G1 X10.000 F1200.000 E0.333");
        assert_eq!(program.stats.extrusion_moves, 1);
    }

    #[test]
    fn test_default_blocks_wrap_body() {
        let (_, document) = render(ONE_SEGMENT, &PrintConfig::default(), false).unwrap();
        assert!(document.starts_with(";START GCODE\n"));
        assert!(document.ends_with("M84 ; disable motors"));
        assert!(document.contains("\nM107\nG1 X10.000 F1200.000 E0.333\n; END Gcode\n"));
    }

    #[test]
    fn test_render_rejects_bad_input() {
        assert!(render("12", &PrintConfig::default(), false).is_err());
        let err =
            render(r#"[{"start": [0, 0, 0]}]"#, &PrintConfig::default(), false).unwrap_err();
        assert!(format!("{:#}", err).contains("segment 0 is missing its end point"));
    }

    #[test]
    fn test_generate_file_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("segments.json");
        let output = dir.path().join("out.gcode");
        fs::write(&input, ONE_SEGMENT).unwrap();

        generate_file(&input, &body_config(), Some(&output), false).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "START\nG1 X10.000 F1200.000 E0.333\nEND");
    }

    #[test]
    fn test_generate_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = generate_file(&missing, &PrintConfig::default(), None, false).unwrap_err();
        assert!(err.to_string().contains("reading segments"));
    }
}
