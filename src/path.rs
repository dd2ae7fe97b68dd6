use std::fmt::{Display, Formatter};

use itertools::Itertools;
use unordered_pair::UnorderedPair;

use crate::position::{Dimension, Position};
use crate::shape::Shape;

/// The polyline a connector draws between two matched tiles.
///
/// A [`Shape::Straight`] path holds exactly its two endpoints; the bent shapes hold four points:
/// an endpoint, two bends, and the other endpoint.
/// Points run from the first tile handed to [`PathSolver::connect`](crate::PathSolver::connect) to the second.
/// Endpoints always name cells on the board, while bends may lie on a sentinel line just outside it.
/// Consecutive points always share a row or a column; when a bend falls on an endpoint's own line
/// (an L-shaped connector) the segment touching that endpoint has zero length.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Path {
    shape: Shape,
    points: Vec<Position>,
}

impl Path {
    pub(crate) fn straight(a: Position, b: Position) -> Self {
        Self { shape: Shape::Straight, points: vec![a, b] }
    }

    pub(crate) fn bent(shape: Shape, points: [Position; 4]) -> Self {
        debug_assert_ne!(shape, Shape::Straight);
        Self { shape, points: points.to_vec() }
    }

    pub(crate) fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// Which shape family found this path.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// All points in drawing order.
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// The number of points: 2 for straight connectors, 4 otherwise.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a path has at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The tile selected first: `a` in [`PathSolver::connect`](crate::PathSolver::connect),
    /// or the earlier tile in row-major order for a [`Hint`](crate::Hint).
    pub fn start(&self) -> Position {
        self.points[0]
    }

    /// The tile selected second.
    pub fn end(&self) -> Position {
        self.points[self.points.len() - 1]
    }

    /// The interior turn points, empty for a straight path.
    pub fn bends(&self) -> &[Position] {
        &self.points[1..self.points.len() - 1]
    }

    /// Consecutive `(from, to)` pairs, each a horizontal or vertical run.
    ///
    /// An L-shaped connector repeats the corner tile, so one of its runs has `from == to`.
    pub fn segments(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.points.iter().copied().tuple_windows()
    }

    /// The two tiles this path joins, irrespective of drawing direction.
    pub fn endpoints(&self) -> UnorderedPair<Position> {
        UnorderedPair(self.start(), self.end())
    }

    /// Whether any bend lies outside a board of `dims`, i.e. the connector wraps around an edge.
    pub fn leaves_board(&self, dims: (Dimension, Dimension)) -> bool {
        self.bends().iter().any(|bend| !bend.is_within(dims))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.points.iter().join(" -> "))
    }
}
