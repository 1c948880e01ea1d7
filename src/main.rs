use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::ui::{coord_to_string, parse_coord, render_game};
use seabattle::{init_logging, Difficulty, Game, Phase, Round};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DifficultyArg {
    Easy,
    Normal,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = DifficultyArg::Normal)]
        difficulty: DifficultyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Reveal the computer's ships")]
        debug: bool,
        #[arg(long, help = "Place your fleet at random")]
        auto_place: bool,
    },
}

const HELP: &str = "Commands: <square> e.g. B7, t = turn ship, auto = place remaining ships, \
d = toggle debug view, r = restart, q = quit";

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            debug,
            auto_place,
        } => {
            let rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut game = Game::new(difficulty.into(), rng)?;
            if auto_place {
                game.place_remaining_randomly()?;
            }
            play(&mut game, debug)?;
        }
    }
    Ok(())
}

fn report(round: &Round) {
    println!("You: {} at {}", round.player, coord_to_string(round.player.target));
    if let Some(shot) = round.computer {
        println!("Computer: {} at {}", shot, coord_to_string(shot.target));
    }
}

fn play(game: &mut Game, mut debug: bool) -> anyhow::Result<()> {
    println!("{}", HELP);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", render_game(game, debug));
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        match input {
            "q" | "quit" => return Ok(()),
            "r" | "restart" => {
                game.reset()?;
                continue;
            }
            "d" | "debug" => {
                debug = !debug;
                continue;
            }
            "h" | "help" => {
                println!("{}", HELP);
                continue;
            }
            _ => {}
        }
        match game.phase() {
            Phase::PlacingShips => match input {
                "t" | "turn" => {
                    game.flip_preview();
                }
                "auto" => game.place_remaining_randomly()?,
                _ => match parse_coord(input) {
                    Some(c) => {
                        if let Err(e) = game.place_preview(c) {
                            println!("Cannot place ship there: {}", e);
                        }
                    }
                    None => println!("Invalid input. {}", HELP),
                },
            },
            Phase::Playing => match parse_coord(input) {
                Some(c) => match game.fire(c) {
                    Ok(round) => report(&round),
                    Err(e) => println!("{}", e),
                },
                None => println!("Invalid square. {}", HELP),
            },
            Phase::GameOver(_) => println!("Game over. Press r to play again or q to quit."),
        }
    }
}
