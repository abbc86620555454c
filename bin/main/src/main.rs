mod cli;
mod config;

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use game::{
    error::{ParseKindError, SetupError},
    setup::generate_back_rank,
    Game, GameStatus, MoveError, PromotionMode, SetupKind, Square,
};
use io::{
    board_io::format_position,
    game_io::{
        format_game_state, format_move_list, parse_fen, parse_move_list,
        PlacementError,
    },
    move_io::format_move,
};

use cli::{Cli, Commands};
use config::{Config, ConfigError};

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Kind(#[from] ParseKindError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("replay stopped at ply {ply}: {source}")]
    Replay {
        ply: usize,
        source: MoveError,
    },
}

struct Settings {
    setup: SetupKind,
    seed: u64,
    promotion: PromotionMode,
    show_board: bool,
    fen: Option<String>,
}

impl Settings {
    /// Command-line flags win over the configuration file.
    fn resolve(cli: &Cli, config: Config) -> Result<Settings, AppError> {
        let setup: SetupKind = cli
            .setup
            .as_deref()
            .unwrap_or(config.setup.as_str())
            .parse()?;
        let promotion: PromotionMode = if cli.strict_promotion {
            PromotionMode::Strict
        } else {
            config.promotion.parse()?
        };

        Ok(Settings {
            setup,
            seed: cli.seed.unwrap_or(config.seed()),
            promotion,
            show_board: config.show_board,
            fen: cli.fen.clone(),
        })
    }

    fn new_game(&self) -> Result<Game, AppError> {
        let game = match &self.fen {
            Some(fen) => parse_fen(fen)?,
            None => Game::new(self.setup, &mut StdRng::seed_from_u64(self.seed))?,
        };

        Ok(game.with_promotion_mode(self.promotion))
    }
}

fn announce(game: &Game) {
    match game.status() {
        GameStatus::Ongoing => {}
        GameStatus::Check(color) => println!("{color} is in check."),
        GameStatus::Checkmate(color) => {
            println!("Checkmate, {} wins.", color.opponent())
        }
        GameStatus::Stalemate(color) => println!("{color} is stalemated."),
    }
}

/// Shows where the piece on `name` may go, e.g. `?g1`.
fn show_destinations(game: &Game, name: &str) {
    match Square::from_algebraic(name) {
        Some(square) => {
            let destinations = game.legal_destinations(square);
            print!("{}", format_position(game.position(), &destinations));
        }
        None => eprintln!("Unknown square '{name}'"),
    }
}

fn run_play(settings: &Settings) -> Result<(), AppError> {
    let mut game = settings.new_game()?;
    let stdin = std::io::stdin();

    print!("{}", format_game_state(&game, false));

    for line in stdin.lock().lines() {
        let line = line.map_err(|source| AppError::Read {
            path: "stdin".into(),
            source,
        })?;

        for token in line.split_whitespace() {
            match token {
                "quit" | "exit" => return Ok(()),
                "moves" => println!("{}", format_move_list(game.move_log())),
                query if query.starts_with('?') => {
                    show_destinations(&game, &query[1..])
                }
                _ => match game.play(token) {
                    Ok(applied) => {
                        let mover = game.side_to_move().opponent();
                        println!("{mover} {}", format_move(&applied));
                        if settings.show_board {
                            print!("{}", format_position(game.position(), &[]));
                        }
                        announce(&game);
                    }
                    Err(err) => eprintln!("{err}"),
                },
            }
        }

        if matches!(
            game.status(),
            GameStatus::Checkmate(_) | GameStatus::Stalemate(_)
        ) {
            break;
        }

        print!("{} to move> ", game.side_to_move());
        std::io::stdout().flush().ok();
    }

    println!("{}", format_move_list(game.move_log()));
    Ok(())
}

fn run_replay(settings: &Settings, file: &Path) -> Result<(), AppError> {
    let text = fs::read_to_string(file).map_err(|source| AppError::Read {
        path: file.display().to_string(),
        source,
    })?;
    let tokens = parse_move_list(&text);
    let mut game = settings.new_game()?;

    info!("Replaying {} moves from {}", tokens.len(), file.display());

    for (ply, token) in tokens.iter().enumerate() {
        game.play(token).map_err(|source| AppError::Replay {
            ply: ply + 1,
            source,
        })?;
    }

    print!("{}", format_game_state(&game, true));
    announce(&game);
    Ok(())
}

fn run_back_rank(settings: &Settings, count: usize) {
    let mut rng = StdRng::seed_from_u64(settings.seed);

    for _ in 0..count {
        let back_rank = generate_back_rank(&mut rng);
        println!("{}", back_rank.iter().map(|kind| kind.letter()).collect::<String>());
    }
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("ANEKAMACAM_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().or_else(|| {
        std::env::var_os("ANEKAMACAM_CONFIG")
            .map(PathBuf::from)
            .filter(|path| path.exists())
    });

    let result = Config::load(config_path.as_deref())
        .map_err(AppError::from)
        .and_then(|config| Settings::resolve(&cli, config))
        .and_then(|settings| match &cli.command {
            None | Some(Commands::Play) => run_play(&settings),
            Some(Commands::Replay { file }) => run_replay(&settings, file),
            Some(Commands::BackRank { count }) => {
                run_back_rank(&settings, *count);
                Ok(())
            }
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
