//! Board-full detection.

use super::super::{BoardSnapshot, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &BoardSnapshot) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::super::win::detect;
    use super::*;

    fn is_draw(board: &BoardSnapshot) -> bool {
        is_full(board) && detect(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&BoardSnapshot::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = BoardSnapshot::new().with_mark(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = [
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::Center, Mark::O),
            (Position::MiddleRight, Mark::O),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::X),
        ]
        .into_iter()
        .fold(BoardSnapshot::new(), |b, (pos, mark)| b.with_mark(pos, mark));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board = Position::ALL
            .into_iter()
            .fold(BoardSnapshot::new(), |b, pos| b.with_mark(pos, Mark::X));

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
