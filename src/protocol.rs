//! Line protocol spoken with the game controller
//!
//! ```text
//! in:  init: X | init: O     assign our color, start a new game
//! in:  srand: <n>            reseed the tie-break random source
//! in:  d6 | none             opponent move, or opponent passed
//! in:  exit                  stop
//! out: e6 | none             our move, or we pass
//! ```
//!
//! Anything else ends the session.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Pos};
use crate::engine::{Player, Step};
use crate::error::{EngineError, ProtocolError};

/// A parsed controller command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init(Color),
    Seed(u64),
    OpponentMove(Pos),
    OpponentPass,
    Exit,
}

impl FromStr for Command {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();

        if line == "exit" {
            return Ok(Command::Exit);
        }
        if line == "none" {
            return Ok(Command::OpponentPass);
        }

        if let Some(rest) = line.strip_prefix("init:") {
            let mut chars = rest.trim().chars();
            return match (chars.next().and_then(Color::from_symbol), chars.next()) {
                (Some(color), None) => Ok(Command::Init(color)),
                _ => Err(ProtocolError::InvalidColor(rest.trim().to_string())),
            };
        }

        if let Some(rest) = line.strip_prefix("srand:") {
            let rest = rest.trim();
            return rest
                .parse::<u64>()
                .map(Command::Seed)
                .map_err(|_| ProtocolError::InvalidSeed(rest.to_string()));
        }

        line.parse::<Pos>().map(Command::OpponentMove)
    }
}

/// Our answer to a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Move(Pos),
    Pass,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Move(pos) => write!(f, "{}", pos),
            Reply::Pass => f.write_str("none"),
        }
    }
}

/// Run the read-eval loop until `exit`, end of input or a fatal error.
///
/// Each reply is written as one line and flushed immediately.
pub fn serve<I, O, R>(input: I, mut output: O, player: &mut Player<R>) -> Result<(), EngineError>
where
    I: BufRead,
    O: Write,
    R: Rng + SeedableRng,
{
    for line in input.lines() {
        let line = line?;
        debug!("<- {}", line.trim_end());

        match player.handle_line(&line)? {
            Step::Reply(reply) => {
                debug!("-> {}", reply);
                writeln!(output, "{}", reply)?;
                output.flush()?;
            }
            Step::Silent => {}
            Step::Exit => return Ok(()),
        }
    }

    debug!("input closed");
    Ok(())
}
