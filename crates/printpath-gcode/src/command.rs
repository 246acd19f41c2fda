//! Motion command construction.

use std::fmt;

use printpath_math::{Point3, Tolerance};

/// Name of the linear move command.
pub const COMMAND_MOVE: &str = "G1";

/// Parameter letters understood by the move command, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamLetter {
    /// X axis target.
    X,
    /// Y axis target.
    Y,
    /// Z axis target.
    Z,
    /// Feed rate.
    F,
    /// Extrusion amount.
    E,
}

impl ParamLetter {
    /// The letter as written in G-code.
    pub fn as_char(self) -> char {
        match self {
            ParamLetter::X => 'X',
            ParamLetter::Y => 'Y',
            ParamLetter::Z => 'Z',
            ParamLetter::F => 'F',
            ParamLetter::E => 'E',
        }
    }
}

/// A single `<letter><value>` parameter token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Parameter letter.
    pub letter: ParamLetter,
    /// Parameter value.
    pub value: f64,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.3}", self.letter.as_char(), self.value)
    }
}

/// Whether a move deposits filament.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Extrusion {
    /// Travel move, no `E` parameter.
    #[default]
    None,
    /// Extrude this many mm of filament.
    Amount(f64),
}

/// One motion command: the command name followed by its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCommand {
    params: Vec<Param>,
}

impl MoveCommand {
    /// Command name (always `G1`).
    pub fn name(&self) -> &'static str {
        COMMAND_MOVE
    }

    /// Parameters in emission order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Value of the given parameter, if present.
    pub fn get(&self, letter: ParamLetter) -> Option<f64> {
        self.params
            .iter()
            .find(|p| p.letter == letter)
            .map(|p| p.value)
    }

    /// Does this command move any axis?
    pub fn moves_axes(&self) -> bool {
        self.params
            .iter()
            .any(|p| matches!(p.letter, ParamLetter::X | ParamLetter::Y | ParamLetter::Z))
    }

    /// Tokens as written: the command name then each parameter.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(COMMAND_MOVE.to_string())
            .chain(self.params.iter().map(Param::to_string))
            .collect()
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(COMMAND_MOVE)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        Ok(())
    }
}

/// Build a move from `current` to `next` using the default tolerance.
///
/// Only axes that change beyond tolerance are written. `F` is written when a
/// feed rate is given and `E` whenever extrusion is requested, even if the
/// head does not move.
pub fn build_move(
    current: &Point3,
    next: &Point3,
    feed_rate: Option<f64>,
    extrusion: Extrusion,
) -> MoveCommand {
    build_move_with(&Tolerance::DEFAULT, current, next, feed_rate, extrusion)
}

/// [`build_move`] with an explicit tolerance.
pub fn build_move_with(
    tolerance: &Tolerance,
    current: &Point3,
    next: &Point3,
    feed_rate: Option<f64>,
    extrusion: Extrusion,
) -> MoveCommand {
    let mut params = Vec::with_capacity(5);

    if !tolerance.points_equal(current, next) {
        let axes = [ParamLetter::X, ParamLetter::Y, ParamLetter::Z];
        for (i, letter) in axes.into_iter().enumerate() {
            if !tolerance.scalars_equal(current[i], next[i]) {
                params.push(Param {
                    letter,
                    value: next[i],
                });
            }
        }
    }

    if let Some(feed) = feed_rate {
        params.push(Param {
            letter: ParamLetter::F,
            value: feed,
        });
    }

    if let Extrusion::Amount(amount) = extrusion {
        params.push(Param {
            letter: ParamLetter::E,
            value: amount,
        });
    }

    MoveCommand { params }
}
