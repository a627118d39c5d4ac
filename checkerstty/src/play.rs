//! The interactive turn loop: render, ask for a move, hand it to the engine.

use std::io::{BufRead, Write};

use checkers::{GameState, MoveResult};
use crossterm::{cursor, terminal, QueueableCommand};

use crate::prompt::{read_coord, Answer};
use crate::render::render_board;

/// Terminal behaviour for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Clear the screen before each board.
    pub clear_screen: bool,
    /// Style cell tokens with colours.
    pub colour: bool,
}

/// Run turns until the player quits or input ends.
///
/// Returns the number of moves applied during the session.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut GameState,
    input: &mut R,
    out: &mut W,
    options: SessionOptions,
) -> std::io::Result<usize> {
    let mut last: Option<MoveResult> = None;
    let mut applied = 0;

    loop {
        if options.clear_screen {
            out.queue(terminal::Clear(terminal::ClearType::All))?
                .queue(cursor::MoveTo(0, 0))?;
        }
        match last {
            Some(MoveResult::Rejected(reason)) => writeln!(out, "Illegal move ({reason})")?,
            Some(MoveResult::Applied(outcome)) => {
                let (from, to) = (outcome.origin(), outcome.landing());
                let kind = if outcome.is_capture() { " (capture)" } else { "" };
                writeln!(out, "Last move: {from:?} -> {to:?}{kind}")?;
            }
            None => {}
        }

        render_board(out, &game.snapshot(), options.colour)?;
        let player = game.current_player();
        writeln!(out, "{} player's turn ({})", player, player.colour_name())?;

        writeln!(out, "Which pawn would you like to move?")?;
        let Answer::Coord(origin) = read_coord(input, out)? else {
            break;
        };
        writeln!(out, "Where do you want to move it to?")?;
        let Answer::Coord(destination) = read_coord(input, out)? else {
            break;
        };

        let result = game.attempt_move(origin, destination);
        if let MoveResult::Applied(outcome) = result {
            tracing::info!(
                from = ?outcome.origin(),
                to = ?outcome.landing(),
                capture = outcome.is_capture(),
                "move applied"
            );
            applied += 1;
        }
        last = Some(result);
    }

    tracing::info!(applied, "session ended");
    Ok(applied)
}
