//! Session configuration.
//!
//! Defaults reproduce the reference game: undo is locked once the game has
//! ended, nothing is persisted and the board renders with Unicode pieces.
//! Environment variables override the defaults; the binary applies its
//! command-line flags on top of that.

use std::path::PathBuf;

pub const ENV_UNDO_AFTER_GAME_OVER: &str = "CROWNFALL_UNDO_AFTER_GAME_OVER";
pub const ENV_STATS_PATH: &str = "CROWNFALL_STATS_PATH";
pub const ENV_ASCII_BOARD: &str = "CROWNFALL_ASCII_BOARD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// When set, undo after checkmate/stalemate clears the result and play resumes.
    pub allow_undo_after_game_over: bool,
    /// Where the games-played record lives; `None` disables persistence.
    pub stats_path: Option<PathBuf>,
    pub unicode_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            allow_undo_after_game_over: false,
            stats_path: None,
            unicode_board: true,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay settings read through `lookup` onto the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_UNDO_AFTER_GAME_OVER) {
            config.allow_undo_after_game_over = parse_flag(&value);
        }
        if let Some(value) = lookup(ENV_STATS_PATH) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                config.stats_path = Some(PathBuf::from(trimmed));
            }
        }
        if let Some(value) = lookup(ENV_ASCII_BOARD) {
            config.unicode_board = !parse_flag(&value);
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(SessionConfig::from_lookup(|_| None), SessionConfig::default());
    }

    #[test]
    fn environment_values_override_defaults() {
        let config = SessionConfig::from_lookup(|key| match key {
            ENV_UNDO_AFTER_GAME_OVER => Some("Yes".to_owned()),
            ENV_STATS_PATH => Some(" /tmp/crownfall.json ".to_owned()),
            ENV_ASCII_BOARD => Some("1".to_owned()),
            _ => None,
        });
        assert!(config.allow_undo_after_game_over);
        assert_eq!(config.stats_path, Some(PathBuf::from("/tmp/crownfall.json")));
        assert!(!config.unicode_board);
    }

    #[test]
    fn unrecognised_flag_values_read_as_false() {
        let config = SessionConfig::from_lookup(|key| {
            (key == ENV_UNDO_AFTER_GAME_OVER).then(|| "maybe".to_owned())
        });
        assert!(!config.allow_undo_after_game_over);
    }
}
