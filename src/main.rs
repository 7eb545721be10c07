use clap::Parser;
use lifebits::preset;
use lifebits::representation::{deserialize, from_text, next, serialize, to_text};
use std::process::ExitCode;

/// Step a Game of Life board one generation at a time and print each generation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board to start from, eg, "3x3/1e2". Malformed input is read as a single dead cell.
    #[arg(conflicts_with = "preset")]
    representation: Option<String>,

    /// Start from a preset board instead.
    #[arg(short, long)]
    preset: Option<String>,

    /// How many generations to step.
    #[arg(short, long, default_value_t = 1)]
    generations: usize,

    /// Print each generation as a grid of 'x' and '.' instead of its representation.
    #[arg(long)]
    ascii: bool,
}

fn print_game(game: &str, ascii: bool) {
    if ascii {
        println!("{}\n", to_text(game));
    } else {
        println!("{game}");
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut game = match (&args.representation, &args.preset) {
        (Some(representation), _) => {
            let (dims, board) = deserialize(representation);
            serialize(dims, &board)
        }
        (None, Some(name)) => match preset::by_name(name) {
            Some(grid) => from_text(grid),
            None => {
                let names: Vec<&str> = preset::ALL.iter().map(|(n, _)| *n).collect();
                eprintln!("Unknown preset {name:?}. Available: {}", names.join(", "));
                return ExitCode::FAILURE;
            }
        },
        (None, None) => from_text(preset::GLIDER),
    };

    log::info!("Starting from {game}, stepping {} generations", args.generations);
    print_game(&game, args.ascii);
    for _ in 0..args.generations {
        game = next(&game);
        print_game(&game, args.ascii);
    }
    ExitCode::SUCCESS
}
