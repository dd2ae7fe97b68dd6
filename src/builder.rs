//! Building [`Board`]s tile by tile or from a text picture.

use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;

use crate::board::Board;
use crate::cell::{Cell, Occupancy};
use crate::position::{Dimension, Position};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile was placed or removed outside the bounds specified by `dims` on a builder.
    TileOutOfBounds,
    /// A picture had no rows, or no columns.
    EmptyPicture,
    /// The rows of a picture were not all the same length.
    RaggedPicture,
}

/// A builder for rectangular boards.
///
/// Every cell starts out removed; tiles are laid down with [`Self::add_pair`] or [`Self::add_tile`].
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct BoardBuilder<V> {
    // height, width
    dims: (Dimension, Dimension),
    cells: Array2<Cell<V>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl<V: Copy + Default> BoardBuilder<V> {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(height, width)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.0.get(), dims.1.get()), Cell::default),
            invalid_reasons: Default::default(),
        }
    }

    /// Lay down one present tile showing `value`, replacing whatever was at `location`.
    ///
    /// May cause the builder to enter a [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_tile(&mut self, value: V, location: Position) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match location.as_index(self.dims) {
            Some(index) => self.cells[index] = Cell::tile(value),
            None => self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds),
        }

        self
    }

    /// Lay down two tiles sharing a face. The order in which `locations` are specified does not matter.
    ///
    /// May cause the builder to enter a [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds) invalid state if either location is out of bounds,
    /// in which case neither tile is placed.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_pair(&mut self, value: V, locations: (Position, Position)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if [locations.0, locations.1].iter().any(|location| !location.is_within(self.dims)) {
            self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds);
            return self;
        }

        self.add_tile(value, locations.0).add_tile(value, locations.1)
    }

    /// Mark the tile at `location` as removed. Its face is kept but can no longer be matched.
    ///
    /// May cause the builder to enter a [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn remove(&mut self, location: Position) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match location.as_index(self.dims) {
            Some(index) => self.cells[index].occupancy = Occupancy::Removed,
            None => self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds),
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board<V>, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
        })
    }
}

impl BoardBuilder<char> {
    /// Start from a text picture of the board, one line per row.
    /// `.` marks a cleared cell; any other character is a present tile with that face.
    /// Leading and trailing blank lines and surrounding whitespace on each line are ignored.
    ///
    /// May cause the builder to enter an [`EmptyPicture`](BuilderInvalidReason::EmptyPicture)
    /// or [`RaggedPicture`](BuilderInvalidReason::RaggedPicture) invalid state.
    pub fn from_picture(picture: &str) -> Self {
        let rows = picture.lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .collect_vec();
        let rows = match rows.iter().rposition(|line| !line.is_empty()) {
            Some(last) => &rows[..=last],
            None => &rows[..0],
        };

        let width = rows.first().map_or(0, |row| row.chars().count());
        let (Some(height), Some(width)) = (NonZero::new(rows.len()), NonZero::new(width)) else {
            return Self::invalid((Dimension::MIN, Dimension::MIN), BuilderInvalidReason::EmptyPicture);
        };
        if rows.iter().any(|row| row.chars().count() != width.get()) {
            return Self::invalid((height, width), BuilderInvalidReason::RaggedPicture);
        }

        let mut builder = Self::with_dims((height, width));
        for (row, line) in rows.iter().enumerate() {
            for (column, face) in line.chars().enumerate().filter(|(_, face)| *face != '.') {
                builder.add_tile(face, Position::from((row, column)));
            }
        }

        builder
    }

    fn invalid(dims: (Dimension, Dimension), reason: BuilderInvalidReason) -> Self {
        let mut builder = Self::with_dims(dims);
        builder.invalid_reasons.push(reason);
        builder
    }
}
