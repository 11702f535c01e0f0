use std::path::Path;

use crate::ai::Difficulty;
use crate::error::ConfigError;
use crate::game::{MIN_COLS, MIN_ROWS, MIN_WIN_LENGTH};

/// Upper bounds for the setup screen; a board larger than this does not fit
/// a reasonable terminal.
pub const MAX_ROWS: usize = 20;
pub const MAX_COLS: usize = 20;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub game: GameConfig,
}

/// Default board geometry offered on the setup screen.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: MIN_ROWS,
            cols: MIN_COLS,
            win_length: MIN_WIN_LENGTH,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            difficulty: Difficulty::Hard,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            game: GameConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < MIN_ROWS || self.board.rows > MAX_ROWS {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_ROWS}, {MAX_ROWS}]"
            )));
        }
        if self.board.cols < MIN_COLS || self.board.cols > MAX_COLS {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in [{MIN_COLS}, {MAX_COLS}]"
            )));
        }
        let max_win_length = self.board.rows.min(self.board.cols);
        if self.board.win_length < MIN_WIN_LENGTH || self.board.win_length > max_win_length {
            return Err(ConfigError::Validation(format!(
                "board.win_length must be in [{MIN_WIN_LENGTH}, {max_win_length}]"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.board.win_length, 4);
        assert_eq!(config.game.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows, 8);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.game.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.rows, AppConfig::default().board.rows);
    }

    #[test]
    fn test_difficulty_parses_from_toml() {
        let toml_str = r#"
[game]
difficulty = "easy"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.board.rows = 5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.cols = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_win_length_above_min_dimension() {
        let mut config = AppConfig::default();
        config.board.rows = 6;
        config.board.cols = 9;
        config.board.win_length = 7;
        assert!(config.validate().is_err());

        config.board.win_length = 6;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.board.rows = 21;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.rows, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 10
cols = 12
win_length = 5

[game]
difficulty = "easy"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 10);
        assert_eq!(config.board.cols, 12);
        assert_eq!(config.board.win_length, 5);
        assert_eq!(config.game.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[board]\nrows = 3\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
