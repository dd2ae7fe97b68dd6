/// Movement rules a [`PathSolver`](crate::PathSolver) searches under.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rules {
    /// Allow connectors to bend just outside the board, wrapping around an edge.
    /// When disabled, every bend must land on a cleared cell.
    pub wraparound: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self { wraparound: true }
    }
}

impl Rules {
    /// Rules for boards whose edge is a wall: connectors never leave the grid.
    pub fn enclosed() -> Self {
        Self { wraparound: false }
    }
}
