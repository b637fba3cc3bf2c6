use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

/// The eight lines of the grid as `(x, y)` triples: rows, columns, then the
/// two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

pub fn has_won(board: &Board, mark: Mark) -> bool {
    winning_line_for(board, mark).is_some()
}

fn winning_line_for(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    let rows = board.rows();
    LINES
        .iter()
        .find(|line| line.iter().all(|&(x, y)| rows[y][x] == mark))
        .map(|line| {
            let (sx, sy) = line[0];
            let (ex, ey) = line[2];
            WinningLine::new(mark, Position::new(sx, sy), Position::new(ex, ey))
        })
}

/// X is checked before O.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    winning_line_for(board, Mark::X).or_else(|| winning_line_for(board, Mark::O))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        _ if board.is_full() => GameStatus::Draw,
        _ => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::history::build_history;

    fn board_from(moves: &[(usize, usize)]) -> Board {
        let positions: Vec<Position> = moves.iter().copied().map(Position::from).collect();
        *build_history(&positions).last().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::empty()), GameStatus::InProgress);
    }

    #[test]
    fn test_row_win() {
        // X: top row, O: middle row (incomplete)
        let board = board_from(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
        assert_eq!(evaluate(&board), GameStatus::XWon);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_column_win_for_o() {
        let board = board_from(&[(0, 0), (2, 0), (1, 0), (2, 1), (0, 2), (2, 2)]);
        assert_eq!(evaluate(&board), GameStatus::OWon);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from(&[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_anti_diagonal_win_for_o() {
        let board = board_from(&[(1, 0), (0, 2), (0, 1), (1, 1), (2, 1), (2, 0)]);
        assert_eq!(evaluate(&board), GameStatus::OWon);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_worked_fixture_without_line_is_in_progress() {
        // X (0,0) (1,1) (2,0); O (0,1) (2,2): top row misses (1,0), the
        // anti-diagonal misses (0,2).
        let board = board_from(&[(0, 0), (0, 1), (1, 1), (2, 2), (2, 0)]);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_worked_fixture_completed_on_anti_diagonal() {
        let board = board_from(&[(0, 0), (0, 1), (1, 1), (2, 2), (2, 0), (1, 0), (0, 2)]);
        assert_eq!(evaluate(&board), GameStatus::XWon);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(&[
            (1, 1),
            (0, 0),
            (0, 1),
            (2, 1),
            (2, 0),
            (0, 2),
            (1, 2),
            (1, 0),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_status_depends_on_lines() {
        let board = board_from(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), GameStatus::Draw);

        let board = board_from(&[
            (0, 0),
            (1, 0),
            (1, 1),
            (2, 0),
            (0, 2),
            (0, 1),
            (2, 1),
            (1, 2),
            (2, 2),
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert!(!has_won(&Board::empty(), Mark::Empty));
        assert_eq!(evaluate(&Board::empty()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_from(&[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    fn count_finished_games(board: Board, turn: usize, finished: &mut usize) {
        assert!(
            !(has_won(&board, Mark::X) && has_won(&board, Mark::O)),
            "both marks won on\n{}",
            board
        );
        if evaluate(&board).is_over() {
            *finished += 1;
            return;
        }
        for position in board.available_moves() {
            count_finished_games(
                board.with_mark(position, Mark::for_turn(turn)),
                turn + 1,
                finished,
            );
        }
    }

    #[test]
    fn test_no_reachable_board_has_two_winners() {
        let mut finished = 0;
        count_finished_games(Board::empty(), 0, &mut finished);
        assert_eq!(finished, 255_168);
    }
}
