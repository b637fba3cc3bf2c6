use common::games::tictactoe::{Board, BoardView, GameView, check_win_with_line};

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    x 0 1 2\n");
    for (y, row) in board.rows().iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(|mark| mark.symbol()).collect();
        out.push_str(&format!("  y {} {}\n", y, cells.join(" ")));
    }
    out
}

pub fn render_winner(winner: Option<&str>) -> Option<String> {
    match winner? {
        "draw" => Some("Draw!".to_string()),
        mark => Some(format!("{} wins!", mark)),
    }
}

pub fn render_board_view(view: &BoardView) -> String {
    let mut out = render_board(&view.board);
    if let Some(line) = render_winner(view.winner.as_deref()) {
        out.push_str(&line);
        if let Some(winning) = check_win_with_line(&view.board) {
            out.push_str(&format!(" {} to {}", winning.start, winning.end));
        }
        out.push('\n');
    }
    out
}

pub fn render_game_view(view: &GameView) -> String {
    let mut out = String::new();
    for (i, board) in view.boards.iter().enumerate() {
        out.push_str(&format!("-- after {} moves\n", i));
        out.push_str(&render_board(board));
    }
    if let Some(line) = render_winner(view.winner.as_deref()) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::empty());
        assert_eq!(text, "    x 0 1 2\n  y 0 . . .\n  y 1 . . .\n  y 2 . . .\n");
    }

    #[test]
    fn test_render_board_view_names_winning_line() {
        use common::GameId;
        use common::games::tictactoe::{Position, TicTacToeGame};

        let moves = [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]
            .into_iter()
            .map(Position::from)
            .collect();
        let game = TicTacToeGame::from_moves(GameId::new(1), moves).unwrap();
        let text = render_board_view(&game.board_view());
        assert!(text.ends_with("X wins! (0, 0) to (2, 2)\n"));
    }

    #[test]
    fn test_render_winner() {
        assert_eq!(render_winner(None), None);
        assert_eq!(render_winner(Some("X")), Some("X wins!".to_string()));
        assert_eq!(render_winner(Some("draw")), Some("Draw!".to_string()));
    }
}
