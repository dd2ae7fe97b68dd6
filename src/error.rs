use crate::position::Position;

/// Reasons two tiles cannot be connected, or a hint cannot be given.
///
/// None of these are fatal: they are the ordinary "no" answers a game loop turns into feedback
/// (an error cue on a bad selection, or the end of a round when no pairs remain).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConnectError {
    /// A selected position does not name a cell on the board.
    #[error("position {0} lies outside the board")]
    OutOfBounds(Position),
    /// A selected cell no longer holds a tile.
    #[error("no tile at {0}; it has already been removed")]
    NotPresent(Position),
    /// Both selections name the same cell.
    #[error("tile at {0} cannot be matched with itself")]
    SameTile(Position),
    /// The two tiles show different faces; no search is attempted.
    #[error("tiles at {0} and {1} have different faces")]
    ValueMismatch(Position, Position),
    /// The faces match but no straight, one-bend or two-bend connector is clear.
    #[error("no clear connector between {0} and {1}")]
    NoClearPath(Position, Position),
    /// Every pair on the board has been examined and none can be connected.
    #[error("no connectable pairs remain")]
    NoPairsRemain,
}

#[cfg(test)]
mod tests {
    use super::ConnectError;
    use crate::position::Position;

    #[test]
    fn error_display() {
        assert_eq!(
            ConnectError::ValueMismatch(Position(0, 0), Position(2, 1)).to_string(),
            "tiles at (0, 0) and (2, 1) have different faces"
        );
        assert_eq!(ConnectError::NoPairsRemain.to_string(), "no connectable pairs remain");
    }
}
