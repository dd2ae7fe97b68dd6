use itertools::Itertools;
use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::clearance::Clearance;
use crate::error::ConnectError;
use crate::log::{debug, trace};
use crate::path::Path;
use crate::position::Position;
use crate::rules::Rules;
use crate::search;
use crate::shape::Shape;

/// A connectable pair found by [`PathSolver::hint`], with the connector that joins it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hint {
    /// The two tiles, earliest in row-major order first.
    pub pair: UnorderedPair<Position>,
    /// The connector [`PathSolver::connect`] reports for the pair.
    pub path: Path,
}

/// Decides whether tiles on one [`Board`] can be joined under a set of [`Rules`].
/// Use [`Self::connect`] for a chosen pair and [`Self::hint`] to look for any pair at all.
///
/// The solver only reads the board; remove matched tiles between calls, never during one.
pub struct PathSolver<'a, V> {
    board: &'a Board<V>,
    rules: Rules,
}

impl<'a, V> From<&'a Board<V>> for PathSolver<'a, V> {
    fn from(board: &'a Board<V>) -> Self {
        Self { board, rules: Rules::default() }
    }
}

impl<'a, V: Copy + Eq> PathSolver<'a, V> {
    /// Search under `rules` instead of the defaults.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Find the connector between the tiles at `a` and `b`.
    ///
    /// Both positions must name present tiles on the board, must differ, and must show the same face;
    /// otherwise the matching [`ConnectError`] is returned before any search runs.
    /// The shape families are then tried in [`Shape::VARIANTS`] order and the first clear connector is returned.
    /// Fails with [`NoClearPath`](ConnectError::NoClearPath) if none is clear.
    /// The returned path starts at `a` and ends at `b`.
    pub fn connect(&self, a: Position, b: Position) -> Result<Path, ConnectError> {
        let face_a = self.face_at(a)?;
        let face_b = self.face_at(b)?;
        if a == b {
            return Err(ConnectError::SameTile(a));
        }
        if face_a != face_b {
            return Err(ConnectError::ValueMismatch(a, b));
        }

        let clear = Clearance::new(self.board, UnorderedPair(a, b));
        let path = Shape::VARIANTS.iter()
            .find_map(|shape| search::find(*shape, &clear, a, b, &self.rules))
            .ok_or(ConnectError::NoClearPath(a, b))?;

        trace!(%a, %b, shape = %path.shape(), %path, "connected");
        Ok(path)
    }

    /// Find the first pair of present tiles, in row-major order, that [`Self::connect`] can join.
    ///
    /// Pairs `(i, j)` are visited by ascending flat index with `i < j`, so repeated hints on an unchanged board agree.
    /// Removed cells are skipped up front; they could never be connected anyway.
    /// Fails with [`NoPairsRemain`](ConnectError::NoPairsRemain) once every pair has been examined.
    pub fn hint(&self) -> Result<Hint, ConnectError> {
        let mut examined = 0usize;

        let found = self.board.present()
            .collect_vec()
            .into_iter()
            .tuple_combinations()
            .inspect(|_| examined += 1)
            .find_map(|(a, b)| self.connect(a, b).ok().map(|path| Hint { pair: UnorderedPair(a, b), path }));

        debug!(examined, found = found.is_some(), "hint scan finished");
        found.ok_or(ConnectError::NoPairsRemain)
    }

    fn face_at(&self, position: Position) -> Result<V, ConnectError> {
        let cell = self.board.get(position).ok_or(ConnectError::OutOfBounds(position))?;
        cell.face().ok_or(ConnectError::NotPresent(position))
    }
}
