#![warn(missing_docs)]

//! # `onet`
//!
//! Connector search for Onet-style tile matching games ("Pikachu", Shisen-sho and relatives).
//! Two tiles with the same face may be removed together when a connector with at most two bends joins them
//! without crossing any other tile; the connector may leave the board and wrap around its edge.
//!
//! Begin by building a board with a [`BoardBuilder`], either tile by tile or from a text picture.
//! Call [`connect()`](crate::Board::connect) with two selected positions to get the connector's [`Path`],
//! or [`hint()`](crate::Board::hint) to find any connectable pair at all.
//! Once a pair has been connected, take it off the board with [`remove_pair()`](crate::Board::remove_pair).
//!
//! # Internals
//! Every search reduces to one primitive: whether a straight horizontal or vertical run of cells is clear.
//! The two tiles being connected count as clear for their own connector; every other present tile blocks.
//!
//! Connectors come in three [`Shape`] families, tried in order:
//! 1. Straight: the tiles share a row or column and the run between them is clear.
//! 2. One bend: a single turn on a line between the tiles (a Z, or an L when the turn sits on a tile's own line).
//!    Rows are swept before columns.
//! 3. Two bends: the connector detours past both tiles, probing down, up, right and left in that order.
//!    Each probe may end on the sentinel line just outside the board when both tiles can reach the edge.
//!
//! The first family with a clear connector wins, so answers are deterministic for a given board and pair.

pub use board::Board;
pub use builder::BoardBuilder;
pub use cell::{Cell, Occupancy};
pub use error::ConnectError;
pub use path::Path;
pub use position::Position;
pub use rules::Rules;
pub use shape::{Shape, SquareStep};
pub use solver::{Hint, PathSolver};

pub(crate) mod board;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod clearance;
pub(crate) mod error;
pub(crate) mod log;
pub(crate) mod path;
pub(crate) mod position;
pub(crate) mod rules;
pub(crate) mod search;
pub(crate) mod shape;
pub(crate) mod solver;
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;
