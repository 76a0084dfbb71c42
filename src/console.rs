//! Interactive console game: a human against the computer
//!
//! At the prompt the human types a coordinate (`d6` or `D6`), `?` to see
//! the board with legal moves marked `*`, or `q` to quit. The board and
//! the mover's disc score are printed after every move.

use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::board::{Board, Color, Pos};
use crate::config::PlayerConfig;
use crate::error::EngineError;
use crate::eval::AdaptiveHeuristic;

/// How a console game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOutcome {
    /// The human typed `q` or input ran out
    Quit,
    /// Neither side can move
    Finished { black: u32, white: u32 },
}

/// Play from `board` until the game ends or the human quits.
///
/// `human` moves from `input`; the other color is played with
/// `config.strategy`.
pub fn play_console<I, O, R>(
    mut input: I,
    mut output: O,
    mut board: Board,
    config: &PlayerConfig,
    human: Color,
    rng: &mut R,
) -> Result<ConsoleOutcome, EngineError>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut heuristic = AdaptiveHeuristic::with_early_game(config.early_game_moves);
    info!("console game, human plays {:?}", human);
    write!(output, "{}", board)?;

    loop {
        let mover = board.side_to_move();

        if board.legal_moves().is_empty() {
            board.switch_side();
            if board.legal_moves().is_empty() {
                let black = board.count(Color::Black);
                let white = board.count(Color::White);
                writeln!(output, "Game over: X {} / O {}", black, white)?;
                output.flush()?;
                return Ok(ConsoleOutcome::Finished { black, white });
            }
            writeln!(output, "{} passes", mover.symbol())?;
            continue;
        }

        prompt(&mut output, mover)?;
        let mv = if mover == human {
            match read_human_move(&mut input, &mut output, &board)? {
                Some(mv) => mv,
                None => return Ok(ConsoleOutcome::Quit),
            }
        } else {
            match config.strategy.choose(&board, &heuristic, rng) {
                Some(mv) => {
                    writeln!(output, "{}", mv)?;
                    mv
                }
                None => {
                    board.switch_side();
                    continue;
                }
            }
        };

        let flipped = board.apply_move(mv.to_mask());
        debug!("{} plays {} flipping {}", mover.symbol(), mv, flipped.count());
        // The heuristic takes the computer's point of view
        heuristic.on_move_made(mv, mover == human);

        write!(output, "{}", board)?;
        writeln!(
            output,
            "Score for {}: {}",
            mover.symbol(),
            board.disc_difference(mover)
        )?;
    }
}

fn prompt<O: Write>(output: &mut O, mover: Color) -> Result<(), EngineError> {
    write!(output, "{}'s move: ", mover.symbol())?;
    output.flush()?;
    Ok(())
}

/// Read lines until a legal move, `q` or end of input.
fn read_human_move<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    board: &Board,
) -> Result<Option<Pos>, EngineError> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let text = line.trim();
        if text.starts_with('q') {
            return Ok(None);
        }
        if text.starts_with('?') {
            write!(output, "{}", board.render_with_moves())?;
        } else {
            match text.parse::<Pos>() {
                Ok(mv) if board.is_legal(mv) => return Ok(Some(mv)),
                _ => writeln!(output, "Invalid position!")?,
            }
        }
        prompt(output, board.side_to_move())?;
    }
}
