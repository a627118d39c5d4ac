//! Text rendering of a board snapshot.

use std::io::Write;

use checkers::{Cell, Player};
use crossterm::style::{StyledContent, Stylize};

/// Style a cell token the way the board is shown on a colour terminal.
fn styled(cell: Cell) -> StyledContent<char> {
    let token = cell.to_char();
    match cell {
        Cell::Illegal => token.black(),
        Cell::Empty => token.white().bold(),
        Cell::OccupiedBy(Player::First) => token.green(),
        Cell::OccupiedBy(Player::Second) => token.cyan(),
    }
}

fn write_column_header<W: Write>(out: &mut W, size: usize) -> std::io::Result<()> {
    write!(out, "   ")?;
    for col in 0..size {
        write!(out, "{col:<4}")?;
    }
    writeln!(out)
}

/// Write `rows` with row and column indices around the grid.
///
/// With `colour` off the plain tokens are written, which keeps the output
/// usable when stdout is not a terminal.
pub fn render_board<W: Write>(
    out: &mut W,
    rows: &[Vec<Cell>],
    colour: bool,
) -> std::io::Result<()> {
    write_column_header(out, rows.len())?;
    for (idx, row) in rows.iter().enumerate() {
        write!(out, "{idx:<2} ")?;
        for &cell in row {
            if colour {
                write!(out, "{}   ", styled(cell))?;
            } else {
                write!(out, "{}   ", cell.to_char())?;
            }
        }
        writeln!(out, "{idx}")?;
    }
    write_column_header(out, rows.len())?;
    writeln!(out)
}
