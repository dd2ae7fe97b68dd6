#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use unordered_pair::UnorderedPair;

    use crate::board::Board;
    use crate::builder::BoardBuilder;
    use crate::error::ConnectError;
    use crate::path::Path;
    use crate::position::Position;
    use crate::shape::Shape;

    /// Every segment is horizontal or vertical and crosses no present tile other than the path's own endpoints.
    fn assert_connector(board: &Board, path: &Path) {
        let ends = path.endpoints();
        for (from, to) in path.segments() {
            assert!(from.is_aligned_with(to), "diagonal segment {} -> {}", from, to);

            for row in from.0.min(to.0)..=from.0.max(to.0) {
                for column in from.1.min(to.1)..=from.1.max(to.1) {
                    let position = Position(row, column);
                    if position == ends.0 || position == ends.1 {
                        continue;
                    }
                    assert!(!board.is_present(position), "segment {} -> {} crosses {}", from, to, position);
                }
            }
        }
    }

    #[test]
    fn straight_across_cleared_cells() {
        let board = BoardBuilder::with_dims((NonZero::new(1).unwrap(), NonZero::new(4).unwrap()))
            .add_pair('A', (Position(0, 0), Position(0, 3)))
            .add_pair('A', (Position(0, 1), Position(0, 2)))
            .remove(Position(0, 1))
            .remove(Position(0, 2))
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), "A..A
");

        let path = board.connect(Position(0, 0), Position(0, 3)).unwrap();
        assert_eq!(path.shape(), Shape::Straight);
        assert_eq!(path.points(), [Position(0, 0), Position(0, 3)]);
    }

    #[test]
    fn different_faces_never_connect() {
        let board = BoardBuilder::from_picture("AB").build().unwrap();

        // adjacent, so any clearance check would pass
        assert_eq!(
            board.connect(Position(0, 0), Position(0, 1)),
            Err(ConnectError::ValueMismatch(Position(0, 0), Position(0, 1)))
        );
    }

    #[test]
    fn full_two_by_two_diagonal() {
        let full = BoardBuilder::from_picture("AA\nAA").build().unwrap();
        let (a, b) = (Position(0, 0), Position(1, 1));

        // every corner holds another tile and nothing can wrap around two edges
        assert_eq!(full.connect(a, b), Err(ConnectError::NoClearPath(a, b)));

        let open_below = BoardBuilder::from_picture("AA\n.A").build().unwrap();
        let path = open_below.connect(a, b).unwrap();
        assert_eq!(path.shape(), Shape::OneBend);
        assert_eq!(path.points(), [a, Position(1, 0), b, b]);
        assert_connector(&open_below, &path);

        let open_right = BoardBuilder::from_picture("A.\nAA").build().unwrap();
        let path = open_right.connect(a, b).unwrap();
        assert_eq!(path.shape(), Shape::OneBend);
        assert_eq!(path.points(), [a, Position(0, 1), b, b]);
        assert_connector(&open_right, &path);
    }

    #[test]
    fn one_bend_prefers_vertical_first() {
        let board = BoardBuilder::from_picture("
            A...
            ....
            ...A
        ").build().unwrap();

        let path = board.connect(Position(0, 0), Position(2, 3)).unwrap();
        assert_eq!(path.to_string(), "(0, 0) -> (1, 0) -> (1, 3) -> (2, 3)");
        assert_connector(&board, &path);
    }

    #[test]
    fn connector_runs_from_first_selection() {
        let board = BoardBuilder::from_picture("
            A...
            ....
            ...A
        ").build().unwrap();
        let (a, b) = (Position(2, 3), Position(0, 0));

        let path = board.connect(a, b).unwrap();
        assert_eq!(path.start(), a);
        assert_eq!(path.end(), b);
        assert_eq!(path.to_string(), "(2, 3) -> (1, 3) -> (1, 0) -> (0, 0)");

        let forward = board.connect(b, a).unwrap();
        assert_eq!(forward.points().iter().rev().copied().collect::<Vec<_>>(), path.points());

        // an L found with the tiles reordered still starts at the first selection
        let board = BoardBuilder::from_picture("A.\nBA").build().unwrap();
        let path = board.connect(Position(1, 1), Position(0, 0)).unwrap();
        assert_eq!(path.points(), [Position(1, 1), Position(1, 1), Position(0, 1), Position(0, 0)]);
        assert_connector(&board, &path);
    }

    #[test]
    fn horizontal_z_when_rows_are_blocked() {
        let board = BoardBuilder::from_picture("
            A.B
            CDE
            F.A
        ").build().unwrap();
        let (a, b) = (Position(0, 0), Position(2, 2));

        let path = board.connect(a, b);
        // C, D and E wall off the middle row; every remaining route needs a third turn
        assert_eq!(path, Err(ConnectError::NoClearPath(a, b)));

        let board = BoardBuilder::from_picture("
            A.B
            C.E
            F.A
        ").build().unwrap();
        let path = board.connect(a, b).unwrap();
        assert_eq!(path.points(), [a, Position(0, 1), Position(2, 1), b]);
        assert_connector(&board, &path);
    }

    #[test]
    fn corner_column_wraps_off_board() {
        let board = BoardBuilder::from_picture("
            ABC
            BDE
            AFG
        ").build().unwrap();
        let (a, b) = (Position(0, 0), Position(2, 0));

        let path = board.connect(a, b).unwrap();
        assert_eq!(path.shape(), Shape::TwoBend);
        assert_eq!(path.points(), [a, Position(0, -1), Position(2, -1), b]);
        assert!(path.leaves_board(board.dims()));
        assert_connector(&board, &path);
    }

    #[test]
    fn u_turn_inside_the_board() {
        let board = BoardBuilder::from_picture("
            ABA
            ...
            CDE
        ").build().unwrap();

        // both tiles sit on the top row, so the border shortcut is taken before any probe
        let path = board.connect(Position(0, 0), Position(0, 2)).unwrap();
        assert_eq!(path.points(), [Position(0, 0), Position(-1, 0), Position(-1, 2), Position(0, 2)]);

        let board = BoardBuilder::from_picture("
            CDE
            ABA
            ...
            FGH
        ").build().unwrap();
        let path = board.connect(Position(1, 2), Position(1, 0)).unwrap();
        assert_eq!(path.points(), [Position(1, 2), Position(2, 2), Position(2, 0), Position(1, 0)]);
        assert!(!path.leaves_board(board.dims()));
        assert_connector(&board, &path);
    }

    #[test]
    fn probe_exits_below_the_board() {
        let board = BoardBuilder::from_picture("
            CDEF
            A.BA
            .GH.
        ").build().unwrap();
        let (a, b) = (Position(1, 0), Position(1, 3));

        let path = board.connect(a, b).unwrap();
        let dims = board.dims();
        assert_eq!(path.points(), [a, Position(3, 0), Position(3, 3), b]);
        for bend in path.bends() {
            let off_row = bend.0 == -1 || bend.0 == dims.0.get() as isize;
            let off_column = bend.1 == -1 || bend.1 == dims.1.get() as isize;
            assert!(off_row ^ off_column, "{} should carry exactly one sentinel", bend);
        }
        assert_connector(&board, &path);
    }

    #[test]
    fn connect_is_idempotent() {
        let board = BoardBuilder::from_picture("
            A.B
            ...
            B.A
        ").build().unwrap();

        let first = board.connect(Position(0, 0), Position(2, 2));
        let second = board.connect(Position(0, 0), Position(2, 2));
        assert!(first.is_ok());
        assert_eq!(first, second);
    }

    #[test]
    fn hint_on_distinct_faces() {
        let board = BoardBuilder::from_picture("
            ABC
            DEF
        ").build().unwrap();

        assert_eq!(board.hint(), Err(ConnectError::NoPairsRemain));
    }

    #[test]
    fn hint_on_stuck_board() {
        let board = BoardBuilder::from_picture("AB\nBA").build().unwrap();

        assert_eq!(board.remaining(), 4);
        assert_eq!(board.hint(), Err(ConnectError::NoPairsRemain));
    }

    #[test]
    fn hint_keeps_scanning_past_failures() {
        let board = BoardBuilder::from_picture("
            ABC
            BAC
        ").build().unwrap();

        let hint = board.hint().unwrap();
        assert_eq!(hint.pair, UnorderedPair(Position(0, 2), Position(1, 2)));
        assert_eq!(hint.path.points(), [Position(0, 2), Position(1, 2)]);
        assert_eq!(board.hint(), Ok(hint));
    }

    #[test]
    fn play_until_cleared() {
        let mut board = BoardBuilder::from_picture("
            ABBA
            CDDC
        ").build().unwrap();

        let mut shapes = Vec::new();
        while !board.is_cleared() {
            let hint = board.hint().unwrap();
            assert_connector(&board, &hint.path);
            shapes.push(hint.path.shape());
            board.remove_pair(hint.pair).unwrap();
        }

        assert_eq!(shapes, [Shape::TwoBend, Shape::Straight, Shape::TwoBend, Shape::Straight]);
        assert_eq!(format!("{}", board), "....
....
");
        assert_eq!(board.hint(), Err(ConnectError::NoPairsRemain));
    }
}
