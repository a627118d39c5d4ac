//! The board engine: cell grid, starting layout and single-move resolution.

use serde::{Deserialize, Serialize};

use crate::config::{CapturePolicy, GameConfig};
use crate::types::{Cell, Coord, Player};

/// A square grid of cells, stored row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// One diagonal square forward.
    Step { from: Coord, to: Coord },
    /// Jump over an adjacent opponent piece, which is removed.
    Capture {
        from: Coord,
        captured: Coord,
        to: Coord,
    },
}

/// Why a proposed move was refused. A refused move leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum MoveRejection {
    #[error("illegal destination: off the board or not an empty playable square")]
    OutOfBoundsOrOccupiedDestination,
    #[error("origin does not hold one of your pieces")]
    NotOwnPiece,
    #[error("pieces cannot move backwards")]
    BackwardMove,
    #[error("not a single diagonal step")]
    InvalidShape,
}

/// A hand-supplied position that cannot be a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("a board needs at least 2 rows, got {0}")]
    TooSmall(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) has the wrong legality for its parity")]
    ParityMismatch { row: usize, col: usize },
}

impl MoveOutcome {
    pub fn origin(&self) -> Coord {
        match *self {
            Self::Step { from, .. } | Self::Capture { from, .. } => from,
        }
    }

    /// Square the moving piece ended up on.
    pub fn landing(&self) -> Coord {
        match *self {
            Self::Step { to, .. } | Self::Capture { to, .. } => to,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, Self::Capture { .. })
    }
}

/// Build the opening position for the default 8x8 configuration.
pub fn new_board() -> Board {
    Board::new(&GameConfig::default())
}

impl Board {
    /// Lay out a board for `config`.
    ///
    /// Cell (r, c) is playable iff `r + c` is odd. The first `starting_rows`
    /// rows are filled with `First`, the last `starting_rows` with `Second`.
    /// `config` is expected to have passed [`GameConfig::validate`].
    pub fn new(config: &GameConfig) -> Self {
        let size = config.board_size;
        let mut cells = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let cell = if (row + col) % 2 == 0 {
                    Cell::Illegal
                } else if row < config.starting_rows {
                    Cell::OccupiedBy(Player::First)
                } else if row >= size.saturating_sub(config.starting_rows) {
                    Cell::OccupiedBy(Player::Second)
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }

        Self { size, cells }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `coord`, or `None` when `coord` is off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Owned row-major copy of every cell.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Rebuild a board from row-major cells, e.g. a stored snapshot.
    ///
    /// The grid must be square and `Illegal` exactly on the even-parity cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, PositionError> {
        let size = rows.len();
        if size < 2 {
            return Err(PositionError::TooSmall(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(PositionError::NotSquare {
                    row,
                    len: line.len(),
                    size,
                });
            }
            for (col, cell) in line.into_iter().enumerate() {
                if cell.is_playable() != ((row + col) % 2 == 1) {
                    return Err(PositionError::ParityMismatch { row, col });
                }
                cells.push(cell);
            }
        }

        Ok(Self { size, cells })
    }

    /// Number of pieces `player` has left.
    pub fn piece_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.occupant() == Some(player))
            .count()
    }

    /// Validate a move for `player` and apply it if legal.
    ///
    /// Checks run in a fixed order and the first failing one decides the
    /// rejection: destination, ownership of the origin, direction, then shape.
    /// A capture in the direction of travel wins over the simple-step rule.
    pub fn validate_and_apply_move(
        &mut self,
        player: Player,
        origin: Coord,
        destination: Coord,
        policy: CapturePolicy,
    ) -> Result<MoveOutcome, MoveRejection> {
        let dest_idx = self
            .index(destination)
            .filter(|&idx| self.cells[idx].is_empty())
            .ok_or(MoveRejection::OutOfBoundsOrOccupiedDestination)?;

        let origin_idx = self
            .index(origin)
            .filter(|&idx| self.cells[idx] == Cell::OccupiedBy(player))
            .ok_or(MoveRejection::NotOwnPiece)?;

        let row_delta = destination.0 - origin.0;
        if row_delta != 0 && row_delta.signum() != player.forward() {
            return Err(MoveRejection::BackwardMove);
        }

        if let Some(capture) = self.find_capture(player, origin, destination, policy) {
            self.apply_capture(player, capture);
            return Ok(capture);
        }

        let col_delta = destination.1 - origin.1;
        if row_delta.abs() != 1 || col_delta.abs() != 1 {
            return Err(MoveRejection::InvalidShape);
        }

        self.cells[origin_idx] = Cell::Empty;
        self.cells[dest_idx] = Cell::OccupiedBy(player);
        Ok(MoveOutcome::Step {
            from: origin,
            to: destination,
        })
    }

    /// Look for a capture along the diagonal `destination` lies on, relative
    /// to `origin`. Nothing is mutated.
    fn find_capture(
        &self,
        player: Player,
        origin: Coord,
        destination: Coord,
        policy: CapturePolicy,
    ) -> Option<MoveOutcome> {
        let direction = (
            (destination.0 - origin.0).signum(),
            (destination.1 - origin.1).signum(),
        );
        if direction.0 == 0 || direction.1 == 0 {
            return None;
        }
        self.capture_in_direction(player, origin, direction, destination, policy)
    }

    fn capture_in_direction(
        &self,
        player: Player,
        origin: Coord,
        direction: Coord,
        destination: Coord,
        policy: CapturePolicy,
    ) -> Option<MoveOutcome> {
        let captured = (origin.0 + direction.0, origin.1 + direction.1);
        let landing = (origin.0 + 2 * direction.0, origin.1 + 2 * direction.1);

        let jumped = self.get(captured)?;
        let landing_cell = self.get(landing)?;
        tracing::trace!(
            ?origin,
            ?direction,
            ?jumped,
            ?landing_cell,
            "probing capture"
        );

        if jumped != Cell::OccupiedBy(player.opponent()) {
            return None;
        }

        match policy {
            CapturePolicy::Strict if destination != landing || !landing_cell.is_empty() => {
                return None;
            }
            CapturePolicy::Legacy if !landing_cell.is_empty() => {
                tracing::warn!(
                    ?landing,
                    ?landing_cell,
                    "legacy capture overwrites occupied landing square"
                );
            }
            _ => {}
        }

        Some(MoveOutcome::Capture {
            from: origin,
            captured,
            to: landing,
        })
    }

    fn apply_capture(&mut self, player: Player, capture: MoveOutcome) {
        if let MoveOutcome::Capture { from, captured, to } = capture {
            self.set_occupancy(captured, Cell::Empty);
            self.set_occupancy(to, Cell::OccupiedBy(player));
            self.set_occupancy(from, Cell::Empty);
        }
    }

    /// Overwrite a playable cell. Illegal cells and off-board coords are left alone.
    fn set_occupancy(&mut self, coord: Coord, cell: Cell) {
        if let Some(idx) = self.index(coord) {
            if self.cells[idx].is_playable() {
                self.cells[idx] = cell;
            }
        }
    }

    fn index(&self, (row, col): Coord) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.size)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.size)?;
        Some(row * self.size + col)
    }

    /// Empty board of the given size. Test scaffolding for hand-built positions.
    #[cfg(test)]
    pub(crate) fn cleared(size: usize) -> Self {
        Self::new(&GameConfig {
            board_size: size,
            starting_rows: 0,
            ..GameConfig::default()
        })
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, coord: Coord, cell: Cell) {
        self.set_occupancy(coord, cell);
    }
}

impl Default for Board {
    fn default() -> Self {
        new_board()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
