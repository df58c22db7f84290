//! Spelunk CLI entry point.

use std::env;
use std::process::ExitCode;

use spelunk_foundation::StdoutOutput;
use spelunk_runtime::{build_demo, Game};

/// CLI configuration parsed from arguments.
struct CliConfig {
    seed: u64,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = args[i]
                    .parse()
                    .map_err(|_| format!("invalid --seed value: {}", args[i]))?;
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("spelunk {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let world = build_demo(config.seed, Box::new(StdoutOutput))?;
    let mut game = Game::new(world)?;
    game.play()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mSpelunk\x1b[0m - Rule-driven interactive fiction engine

\x1b[1mUSAGE:\x1b[0m
    spelunk [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    --seed N         Seed the world's random number generator

\x1b[1mIN-GAME COMMANDS:\x1b[0m
    look                 Describe the current room
    inventory            List what you are carrying
    take / drop THING    Pick things up and put them down
    north, n, up, ...    Move around
    quit                 Leave the game
    Ctrl+D               Leave the game"
    );
}
