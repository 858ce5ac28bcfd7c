//=========================================================================
// Scene Assets
//=========================================================================
//
// Fixed asset paths and the textures the flight scene draws with.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use log::info;

//=== Internal Dependencies ===============================================

use super::{Canvas, Color, TextureHandle};
use crate::core::error::GameError;

//=== Constants ===========================================================

/// Caption shown while the death sequence runs.
pub const GAME_OVER_CAPTION: &str = "Game Over";

/// Caption shown on the title screen.
pub const TITLE_CAPTION: &str = "Flappy";

/// Color of both captions.
pub const CAPTION_COLOR: Color = Color::rgba(255, 100, 0, 255);

//=== AssetPaths ==========================================================

/// Asset locations, relative to the backend's asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub avatar_frames: Vec<PathBuf>,
    pub obstacle: PathBuf,
    pub font: PathBuf,
    pub font_size: u16,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("images/background.png"),
            avatar_frames: (1..=4)
                .map(|i| PathBuf::from(format!("images/bird_frame_{}.png", i)))
                .collect(),
            obstacle: PathBuf::from("images/pipe.png"),
            font: PathBuf::from("fonts/Flappy.ttf"),
            font_size: 20,
        }
    }
}

//=== SceneAssets =========================================================

/// Texture handles used by the flight scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneAssets {
    pub background: TextureHandle,
    pub avatar_frames: Vec<TextureHandle>,
    pub obstacle: TextureHandle,
    pub caption: TextureHandle,
}

impl SceneAssets {
    /// Loads every texture the scene needs. The font must be loadable too,
    /// since the "Game Over" caption is rendered up front.
    pub fn load<C: Canvas + ?Sized>(canvas: &mut C, paths: &AssetPaths) -> Result<Self, GameError> {
        let background = canvas.load_texture(&paths.background)?;

        let avatar_frames = paths
            .avatar_frames
            .iter()
            .map(|path| canvas.load_texture(path))
            .collect::<Result<Vec<_>, _>>()?;

        let obstacle = canvas.load_texture(&paths.obstacle)?;

        canvas.load_font(&paths.font, paths.font_size)?;
        let caption = canvas.render_text(GAME_OVER_CAPTION, CAPTION_COLOR)?;

        info!("Scene assets loaded ({} avatar frames)", avatar_frames.len());

        Ok(Self {
            background,
            avatar_frames,
            obstacle,
            caption,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
