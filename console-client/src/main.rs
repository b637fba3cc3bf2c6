mod config;
mod input;
mod render;

use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};
use common::games::tictactoe::BotStrategy;
use common::{GameId, GameService, InMemoryMoveStore, log, logger};

use input::{Command, parse_command};
use render::{render_board_view, render_game_view};

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Perfect,
    Random,
}

impl From<StrategyArg> for BotStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Perfect => BotStrategy::Perfect,
            StrategyArg::Random => BotStrategy::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "noughts_console_client")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,
    /// Overrides the configured bot strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
    /// Overrides the configured RNG seed.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

const HELP: &str = "\
Commands:
  x y | x,y   place X at column x, row y (0-2)
  n           new game
  g <id>      switch to game <id>
  l           list games
  h           show this game's history
  q           quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut cfg = config::get_config_manager(&args.config).get_config()?;
    if let Some(strategy) = args.strategy {
        cfg.engine.bot_strategy = strategy.into();
    }
    if let Some(seed) = args.seed {
        cfg.engine.rng_seed = Some(seed);
    }

    let prefix = match (&cfg.engine.log_prefix, args.use_log_prefix) {
        (Some(prefix), _) => Some(prefix.clone()),
        (None, true) => Some("Console".to_string()),
        (None, false) => None,
    };
    logger::init_logger(prefix);

    let mut service = GameService::new(InMemoryMoveStore::new(), &cfg.engine);
    let mut current = service.new_game();

    println!("{}", HELP);
    print_game(&service, current)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("game {}> ", current);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Move(position) => match service.make_move(current, position) {
                Ok(view) => {
                    print!("{}", render_board_view(&view));
                    if view.winner.is_some() {
                        if cfg.show_history_on_game_over {
                            print!("{}", render_game_view(&service.view_game(current)?));
                        }
                        println!("Type 'n' for a new game.");
                    }
                }
                Err(e) if e.is_illegal_move() => println!("{}", e),
                Err(e) => {
                    log!("Move failed: {}", e);
                    return Err(e.into());
                }
            },
            Command::NewGame => {
                current = service.new_game();
                print_game(&service, current)?;
            }
            Command::Switch(id) => match service.view_game(id) {
                Ok(_) => {
                    current = id;
                    print_game(&service, current)?;
                }
                Err(e) => println!("{}", e),
            },
            Command::List => {
                let ids: Vec<String> =
                    service.list_games().iter().map(|id| id.to_string()).collect();
                println!("games: {}", ids.join(", "));
            }
            Command::History => print!("{}", render_game_view(&service.view_game(current)?)),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn print_game(
    service: &GameService<InMemoryMoveStore>,
    id: GameId,
) -> Result<(), common::ServiceError> {
    let view = service.view_game(id)?;
    if let Some(board) = view.boards.last() {
        println!("Game {}", id);
        print!("{}", render::render_board(board));
    }
    Ok(())
}
