use super::board::Board;
use super::types::{Mark, Position};

/// Replays committed `moves` from the empty board.
///
/// Returns `moves.len() + 1` snapshots. Moves are trusted: they were
/// validated when first applied, so nothing is re-checked here. An
/// off-board position panics; use `TicTacToeGame::from_moves` for move
/// lists that may be corrupt.
pub fn build_history(moves: &[Position]) -> Vec<Board> {
    let mut boards = Vec::with_capacity(moves.len() + 1);
    boards.push(Board::empty());

    for (index, &position) in moves.iter().enumerate() {
        let previous = boards[boards.len() - 1];
        boards.push(previous.with_mark(position, Mark::for_turn(index)));
    }

    boards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn differing_cells(a: &Board, b: &Board) -> usize {
        a.rows()
            .iter()
            .flatten()
            .zip(b.rows().iter().flatten())
            .filter(|(left, right)| left != right)
            .count()
    }

    #[test]
    fn test_empty_history_is_single_empty_board() {
        let boards = build_history(&[]);
        assert_eq!(boards, vec![Board::empty()]);
    }

    #[test]
    fn test_every_prefix_adds_one_snapshot_and_one_cell() {
        let moves: Vec<Position> = [
            (1, 1),
            (0, 0),
            (0, 1),
            (2, 1),
            (2, 0),
            (0, 2),
            (1, 2),
            (1, 0),
            (2, 2),
        ]
        .into_iter()
        .map(Position::from)
        .collect();

        for n in 0..=moves.len() {
            let boards = build_history(&moves[..n]);
            assert_eq!(boards.len(), n + 1);
            for (i, pair) in boards.windows(2).enumerate() {
                assert_eq!(differing_cells(&pair[0], &pair[1]), 1);
                assert_eq!(pair[1].occupied_count(), i + 1);
            }
        }
    }

    #[test]
    fn test_marks_alternate_starting_with_x() {
        let moves = [Position::new(1, 2), Position::new(0, 0), Position::new(2, 2)];
        let boards = build_history(&moves);
        let last = boards[3];
        assert_eq!(last.rows()[2][1], Mark::X);
        assert_eq!(last.rows()[0][0], Mark::O);
        assert_eq!(last.rows()[2][2], Mark::X);
        assert_eq!(boards[1].rows()[0][0], Mark::Empty);
    }
}
