//! Tanglewood CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tanglewood_runtime::{Console, GameServer, load_game};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    world_file: Option<PathBuf>,
    actions_file: Option<PathBuf>,
    listen: Option<u16>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
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
            "-l" | "--listen" => {
                i += 1;
                if i >= args.len() {
                    return Err("--listen requires a port".into());
                }
                config.listen = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --listen port: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path if config.world_file.is_none() => config.world_file = Some(PathBuf::from(path)),
            path if config.actions_file.is_none() => {
                config.actions_file = Some(PathBuf::from(path));
            }
            _ => return Err("too many file arguments".into()),
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
        println!("tanglewood {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let world_file = config
        .world_file
        .unwrap_or_else(|| PathBuf::from("config/world.toml"));
    let actions_file = config
        .actions_file
        .unwrap_or_else(|| PathBuf::from("config/actions.toml"));
    let game = load_game(&world_file, &actions_file)?;

    match config.listen {
        Some(port) => GameServer::new(game).listen(port)?,
        None => Console::new(game)?.run()?,
    }

    Ok(())
}

fn print_help() {
    println!(
        "Tanglewood - multiplayer interactive-fiction engine

USAGE:
    tanglewood [OPTIONS] [WORLD_FILE] [ACTIONS_FILE]

ARGUMENTS:
    [WORLD_FILE]      World description file (default: config/world.toml)
    [ACTIONS_FILE]    Action catalog file (default: config/actions.toml)

OPTIONS:
    -h, --help        Print help information
    -V, --version     Print version information
    -l, --listen N    Serve the game on TCP port N instead of the console

EXAMPLES:
    tanglewood                            Play the demo world locally
    tanglewood world.toml actions.toml    Play a custom world
    tanglewood --listen 8888              Serve the demo world on port 8888

PROTOCOL:
    One command per line, \"<player>: <text>\"; the response block ends
    with a line containing the EOT character (0x04)."
    );
}
