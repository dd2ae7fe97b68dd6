use strum::{Display, VariantArray};

use crate::position::{Axis, Coord, Dimension};

/// The connector geometries the game permits.
///
/// [`VARIANTS`](VariantArray::VARIANTS) lists them in the order a [`PathSolver`](crate::PathSolver) tries them;
/// the first family that yields a clear connector wins.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Shape {
    /// Both tiles share a row or column and nothing sits between them (an I).
    #[strum(serialize = "straight")]
    Straight,
    /// A single turn inside the span of the two tiles (a Z, or an L when the turn sits on a tile's own line).
    #[strum(serialize = "one-bend")]
    OneBend,
    /// A detour past the span of the two tiles, possibly just outside the board (a U).
    #[strum(serialize = "two-bend")]
    TwoBend,
}

/// A probe direction on a square grid, in screen orientation: rows grow downward and columns grow rightward.
///
/// [`VARIANTS`](VariantArray::VARIANTS) is the order two-bend probes run in:
/// vertical before horizontal, increasing coordinate before decreasing.
#[derive(Copy, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum SquareStep {
    /// Toward increasing row.
    Down,
    /// Toward decreasing row.
    Up,
    /// Toward increasing column.
    Right,
    /// Toward decreasing column.
    Left,
}

impl SquareStep {
    /// The coordinate this direction moves along.
    pub(crate) fn axis(&self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Row,
            Self::Right | Self::Left => Axis::Column,
        }
    }

    pub(crate) fn delta(&self) -> Coord {
        match self {
            Self::Down | Self::Right => 1,
            Self::Up | Self::Left => -1,
        }
    }

    /// The last in-board coordinate reached by moving this way, for a board of `(height, width)`.
    pub(crate) fn border(&self, dims: (Dimension, Dimension)) -> Coord {
        match self {
            Self::Down => dims.0.get() as Coord - 1,
            Self::Right => dims.1.get() as Coord - 1,
            Self::Up | Self::Left => 0,
        }
    }

    /// The coordinate just beyond [`Self::border`]: `height`, `width` or `-1`.
    pub(crate) fn sentinel(&self, dims: (Dimension, Dimension)) -> Coord {
        self.border(dims) + self.delta()
    }
}
