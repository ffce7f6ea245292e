use std::path::PathBuf;

/// Reasons the engine rejects a move. Rejections never mutate the
/// game; the caller decides whether to surface or swallow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell index {index} is outside the board")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already occupied")]
    OccupiedCell { index: usize },

    #[error("the game is already decided")]
    GameOver,
}

/// Errors that can occur when navigating game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JumpError {
    #[error("step {step} is outside the recorded history (length {len})")]
    StepOutOfRange { step: usize, len: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OccupiedCell { index: 17 };
        assert_eq!(err.to_string(), "cell 17 is already occupied");
    }

    #[test]
    fn test_jump_error_display() {
        let err = JumpError::StepOutOfRange { step: 9, len: 3 };
        assert_eq!(
            err.to_string(),
            "step 9 is outside the recorded history (length 3)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display.red_label must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display.red_label must not be empty"
        );
    }
}
