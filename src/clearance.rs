use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::position::{Coord, Dimension, Position};

/// A read-only view of a board for one connection attempt.
///
/// A cell is passable when its tile has been removed, or when it is one of the two tiles being connected:
/// those sit at the ends of every run they anchor and must not block their own connector.
pub(crate) struct Clearance<'a, V> {
    board: &'a Board<V>,
    ends: UnorderedPair<Position>,
}

impl<'a, V: Copy> Clearance<'a, V> {
    pub(crate) fn new(board: &'a Board<V>, ends: UnorderedPair<Position>) -> Self {
        Self { board, ends }
    }

    pub(crate) fn dims(&self) -> (Dimension, Dimension) {
        self.board.dims()
    }

    fn passable(&self, position: Position) -> bool {
        if position == self.ends.0 || position == self.ends.1 {
            return true;
        }

        // cells off the board are never passable
        self.board.get(position).is_some_and(|cell| cell.is_removed())
    }

    /// Whether every cell on `row` from `c1` to `c2` inclusive is passable, in either order.
    pub(crate) fn row(&self, row: Coord, c1: Coord, c2: Coord) -> bool {
        (c1.min(c2)..=c1.max(c2)).all(|column| self.passable(Position(row, column)))
    }

    /// Whether every cell on `column` from `r1` to `r2` inclusive is passable, in either order.
    pub(crate) fn column(&self, column: Coord, r1: Coord, r2: Coord) -> bool {
        (r1.min(r2)..=r1.max(r2)).all(|row| self.passable(Position(row, column)))
    }

    /// Whether the run from `from` to `to` is clear. The two must share a row or column.
    pub(crate) fn line(&self, from: Position, to: Position) -> bool {
        if from.0 == to.0 {
            self.row(from.0, from.1, to.1)
        } else if from.1 == to.1 {
            self.column(from.1, from.0, to.0)
        } else {
            false
        }
    }
}
