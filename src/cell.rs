use strum::Display;

/// Whether a tile still sits in its cell.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Occupancy {
    /// The tile is on the board and blocks any connector through it.
    Present,
    /// The tile has been matched away; connectors may pass through.
    #[default]
    Removed,
}

/// One grid slot: a face value and whether its tile is still on the board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Cell<V> {
    pub(crate) value: V,
    pub(crate) occupancy: Occupancy,
}

impl<V: Copy> Cell<V> {
    pub(crate) fn tile(value: V) -> Self {
        Self { value, occupancy: Occupancy::Present }
    }

    /// The face value, whether or not the tile is still present.
    pub fn value(&self) -> V {
        self.value
    }

    /// The face of a present tile. Removed cells have no face to match against.
    pub fn face(&self) -> Option<V> {
        self.is_present().then_some(self.value)
    }

    /// Whether the tile is present or removed.
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Shorthand for `occupancy() == Occupancy::Present`.
    pub fn is_present(&self) -> bool {
        self.occupancy == Occupancy::Present
    }

    /// Shorthand for `occupancy() == Occupancy::Removed`.
    pub fn is_removed(&self) -> bool {
        self.occupancy == Occupancy::Removed
    }
}
