use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = isize;
pub(crate) type Dimension = NonZero<usize>;

/// One of the two coordinates of a [`Position`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Axis {
    /// The row coordinate; moving along it goes up or down.
    Row,
    /// The column coordinate; moving along it goes left or right.
    Column,
}

impl Axis {
    pub(crate) fn other(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A position `(row, column)` on a board. The top left corner is `Position(0, 0)`.
///
/// Coordinates are signed so that a connector may bend just outside the board:
/// row `-1` or `height` and column `-1` or `width` are valid bend points but never name a cell.
pub struct Position(pub Coord, pub Coord);

impl Position {
    /// The row of this position.
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this position.
    pub fn column(&self) -> Coord {
        self.1
    }

    /// Whether this position names a cell on a board of `dims`, given as `(height, width)`.
    pub fn is_within(&self, dims: (Dimension, Dimension)) -> bool {
        self.as_index(dims).is_some()
    }

    pub(crate) fn as_index(&self, dims: (Dimension, Dimension)) -> Option<(usize, usize)> {
        let row = usize::try_from(self.0).ok().filter(|row| *row < dims.0.get())?;
        let column = usize::try_from(self.1).ok().filter(|column| *column < dims.1.get())?;
        Some((row, column))
    }

    pub(crate) fn along(&self, axis: Axis) -> Coord {
        match axis {
            Axis::Row => self.0,
            Axis::Column => self.1,
        }
    }

    /// A copy of `self` with the coordinate on `axis` replaced.
    pub(crate) fn with(self, axis: Axis, value: Coord) -> Self {
        match axis {
            Axis::Row => Self(value, self.1),
            Axis::Column => Self(self.0, value),
        }
    }

    /// Whether `self` and `other` lie on one horizontal or vertical line.
    pub fn is_aligned_with(&self, other: Position) -> bool {
        self.0 == other.0 || self.1 == other.1
    }
}

impl From<(Ix, Ix)> for Position {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0 as Coord, value.1 as Coord)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::{Axis, Position};

    #[test]
    fn sentinels_have_no_index() {
        let dims = (NonZero::new(3).unwrap(), NonZero::new(4).unwrap());

        assert_eq!(Position(2, 3).as_index(dims), Some((2, 3)));
        assert_eq!(Position(-1, 0).as_index(dims), None);
        assert_eq!(Position(3, 0).as_index(dims), None);
        assert_eq!(Position(0, 4).as_index(dims), None);
        assert!(!Position(0, -1).is_within(dims));
    }

    #[test]
    fn replace_one_coordinate() {
        let p = Position(2, 5);

        assert_eq!(p.with(Axis::Row, -1), Position(-1, 5));
        assert_eq!(p.with(Axis::Column, 0), Position(2, 0));
        assert_eq!(p.along(Axis::Column.other()), 2);
    }
}
