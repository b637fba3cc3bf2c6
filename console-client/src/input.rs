use common::GameId;
use common::games::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    NewGame,
    History,
    List,
    Switch(GameId),
    Help,
    Quit,
}

/// Parses one line typed by the player. Coordinates are checked against the
/// board here, before anything reaches the engine.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err("Empty input".to_string());
    };

    match first.to_ascii_lowercase().as_str() {
        "n" | "new" => Ok(Command::NewGame),
        "h" | "history" => Ok(Command::History),
        "l" | "list" => Ok(Command::List),
        "?" | "help" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "g" | "game" => {
            let id = words
                .next()
                .ok_or_else(|| "Usage: game <id>".to_string())?;
            id.parse::<GameId>()
                .map(Command::Switch)
                .map_err(|_| format!("Invalid game id '{}'", id))
        }
        _ => parse_position(line).map(Command::Move),
    }
}

fn parse_coordinate(name: &str, value: &str) -> Result<usize, String> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Input {} should be a valid integer, got '{}'", name, value.trim()))?;
    let max = BOARD_SIZE as i64 - 1;
    if parsed < 0 {
        return Err(format!("Input {} should be greater than or equal to 0", name));
    }
    if parsed > max {
        return Err(format!("Input {} should be less than or equal to {}", name, max));
    }
    Ok(parsed as usize)
}

/// Accepts `x y` or `x,y`.
fn parse_position(line: &str) -> Result<Position, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [x, y] => Ok(Position::new(parse_coordinate("x", x)?, parse_coordinate("y", y)?)),
        _ => Err(format!("Unknown command '{}', type 'help' for usage", line)),
    }
}
