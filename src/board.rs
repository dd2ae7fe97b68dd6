use std::fmt::{Display, Formatter};

use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::cell::{Cell, Occupancy};
use crate::error::ConnectError;
use crate::path::Path;
use crate::position::{Dimension, Position};
use crate::solver::{Hint, PathSolver};

/// A rectangular grid of tiles, each showing a face of type `V` and either present or removed.
///
/// Dimensions are fixed for the lifetime of a round: matched tiles are removed in place.
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board<V = char> {
    pub(crate) cells: Array2<Cell<V>>,
    // height, width
    pub(crate) dims: (Dimension, Dimension),
}

impl<V: Copy> Board<V> {
    /// `(height, width)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims.1.get()
    }

    /// The cell at `position`, or [`None`] if it lies off the board.
    pub fn get(&self, position: Position) -> Option<&Cell<V>> {
        position.as_index(self.dims).and_then(|index| self.cells.get(index))
    }

    /// Whether `position` holds a tile that has not been removed.
    pub fn is_present(&self, position: Position) -> bool {
        self.get(position).is_some_and(Cell::is_present)
    }

    /// Every position holding a present tile, in row-major order.
    pub fn present(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.indexed_iter()
            .filter(|(_, cell)| cell.is_present())
            .map(|(index, _)| Position::from(index))
    }

    /// How many tiles are still on the board.
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_present()).count()
    }

    /// Whether every tile has been matched away.
    pub fn is_cleared(&self) -> bool {
        self.remaining() == 0
    }

    /// Take a matched pair off the board, typically after [`Self::connect`] succeeded for it.
    ///
    /// Fails without touching the board if either position is off the board, both name the same cell,
    /// or either tile was already removed.
    pub fn remove_pair(&mut self, pair: UnorderedPair<Position>) -> Result<(), ConnectError> {
        let UnorderedPair(a, b) = pair;
        if a == b {
            return Err(ConnectError::SameTile(a));
        }

        let mut indices = Vec::with_capacity(2);
        for position in [a, b] {
            let index = position.as_index(self.dims).ok_or(ConnectError::OutOfBounds(position))?;
            if self.cells[index].is_removed() {
                return Err(ConnectError::NotPresent(position));
            }
            indices.push(index);
        }

        for index in indices {
            self.cells[index].occupancy = Occupancy::Removed;
        }

        Ok(())
    }
}

impl<V: Copy + Eq> Board<V> {
    /// Find the connector between the tiles at `a` and `b` under the default [`Rules`](crate::Rules),
    /// deferring to a [`PathSolver`].
    ///
    /// Returns according to [`PathSolver::connect`].
    pub fn connect(&self, a: Position, b: Position) -> Result<Path, ConnectError> {
        PathSolver::from(self).connect(a, b)
    }

    /// Find the first connectable pair on the board, deferring to a [`PathSolver`].
    ///
    /// Returns according to [`PathSolver::hint`].
    pub fn hint(&self) -> Result<Hint, ConnectError> {
        PathSolver::from(self).hint()
    }
}

impl<V: Display> Display for Board<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                match cell.occupancy {
                    Occupancy::Present => out.push_str(&cell.value.to_string()),
                    Occupancy::Removed => out.push('.'),
                }
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
