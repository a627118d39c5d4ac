//! Reading board coordinates from the player.

use std::io::{BufRead, Write};

use checkers::Coord;

/// What the player typed at a coordinate prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Coord(Coord),
    Quit,
}

/// Ask for a single integer, re-prompting until one is given.
///
/// Returns `None` on `q` or end of input.
fn read_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> std::io::Result<Option<i32>> {
    let mut line = String::new();
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match trimmed.parse() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => {
                tracing::debug!(input = trimmed, "non-numeric coordinate");
                writeln!(out, "Please enter a whole number (or q to quit).")?;
            }
        }
    }
}

/// Ask for a `row` then a `col`.
pub fn read_coord<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> std::io::Result<Answer> {
    let Some(row) = read_number(input, out, "row")? else {
        return Ok(Answer::Quit);
    };
    let Some(col) = read_number(input, out, "col")? else {
        return Ok(Answer::Quit);
    };
    Ok(Answer::Coord((row, col)))
}
