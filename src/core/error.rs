//=========================================================================
// Game Errors
//=========================================================================
//
// Error taxonomy for the whole engine.
//
// Every error originates at the backend boundary (asset loading, draw,
// present) or at the platform layer. Simulation code is total and never
// fails. All variants are fatal: they are propagated to the engine
// facade and end the process with a non-zero exit status.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;

//=== GameError ===========================================================

/// Fatal engine error.
#[derive(Debug, Error)]
pub enum GameError {
    /// A texture or font file is missing or malformed.
    #[error("can't load asset {}: {reason}", path.display())]
    AssetLoad { path: PathBuf, reason: String },

    /// The backend failed to copy a texture or present a frame.
    #[error("can't render frame: {0}")]
    Render(String),

    /// The platform event loop could not be created or failed while running.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// An engine thread could not be started.
    #[error("can't spawn thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),

    /// The core logic thread panicked before returning a result.
    #[error("core thread panicked")]
    CoreThreadPanicked,
}

impl GameError {
    /// Shorthand for an [`GameError::AssetLoad`] built from any path-like value.
    pub fn asset_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::AssetLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_message_names_the_path() {
        let err = GameError::asset_load("images/pipe.png", "file not found");
        let message = err.to_string();
        assert!(message.contains("images/pipe.png"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn render_message_is_prefixed() {
        let err = GameError::Render("copy failed".into());
        assert_eq!(err.to_string(), "can't render frame: copy failed");
    }

    #[test]
    fn game_error_is_error_trait() {
        fn assert_error<T: std::error::Error + Send + 'static>() {}
        assert_error::<GameError>();
    }
}
