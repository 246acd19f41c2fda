//! Final document assembly.

use std::fmt::Display;

/// Line delimiter between commands.
pub const COMMAND_DELIMITER: &str = "\n";

/// Join `start`, `body` and `end` into one newline-delimited document.
///
/// The blocks are written as given; each body item is rendered with
/// `Display` and must already be a single line. No trailing newline is added.
pub fn assemble<S, B, E>(start: &[S], body: &[B], end: &[E]) -> String
where
    S: AsRef<str>,
    B: Display,
    E: AsRef<str>,
{
    let lines: Vec<String> = start
        .iter()
        .map(|l| l.as_ref().to_string())
        .chain(body.iter().map(|c| c.to_string()))
        .chain(end.iter().map(|l| l.as_ref().to_string()))
        .collect();
    lines.join(COMMAND_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{build_move, Extrusion};
    use printpath_math::Point3;

    #[test]
    fn test_assemble_order() {
        assert_eq!(assemble(&["A", "B"], &["cmd1"], &["C"]), "A\nB\ncmd1\nC");
    }

    #[test]
    fn test_assemble_commands() {
        let cmd = build_move(
            &Point3::origin(),
            &Point3::new(0.0, 2.0, 0.0),
            Some(3000.0),
            Extrusion::None,
        );
        let doc = assemble(&["G28".to_string()], &[cmd], &["M84"]);
        assert_eq!(doc, "G28\nG1 Y2.000 F3000.000\nM84");
    }

    #[test]
    fn test_assemble_empty_parts() {
        let none: [&str; 0] = [];
        assert_eq!(assemble(&none, &none, &none), "");
        assert_eq!(assemble(&["A"], &none, &none), "A");
        assert_eq!(assemble(&none, &["x", "y"], &none), "x\ny");
    }
}
