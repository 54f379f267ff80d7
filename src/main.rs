//! Two-player terminal chess.
//!
//! Run with:
//! `cargo run -- [--stats <path>] [--ascii] [--allow-undo]`
//! Logging follows `RUST_LOG` (default `warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use crownfall_chess::cli::terminal_loop::run_stdio_loop;
use crownfall_chess::config::session_config::SessionConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match apply_args(SessionConfig::from_env(), std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run_stdio_loop(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("terminal loop failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn apply_args(
    mut config: SessionConfig,
    mut args: impl Iterator<Item = String>,
) -> Result<SessionConfig, String> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stats" => {
                let path = args.next().ok_or("--stats needs a file path")?;
                config.stats_path = Some(PathBuf::from(path));
            }
            "--ascii" => config.unicode_board = false,
            "--allow-undo" => config.allow_undo_after_game_over = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(config)
}
