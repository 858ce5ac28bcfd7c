//=========================================================================
// Render Bridge
//=========================================================================
//
// The contract between the simulation and a presentation backend.
//
// The core only ever talks to a backend through the `Canvas` trait, so
// window/renderer bootstrap and image decoding stay outside the crate's
// concern. `HeadlessCanvas` is the backend shipped with the crate.
//
// Frame protocol:
// ```text
//   clear() → draw(..)* → present()
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod assets;
mod headless;

//=== External Dependencies ===============================================

use std::path::Path;

//=== Internal Dependencies ===============================================

use crate::core::error::GameError;

//=== Public API ==========================================================

pub use assets::{AssetPaths, SceneAssets, CAPTION_COLOR, GAME_OVER_CAPTION, TITLE_CAPTION};
pub use headless::{DrawCommand, HeadlessCanvas};

//=== TextureHandle =======================================================

/// Opaque handle to a texture owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

//=== Rect ================================================================

/// Destination rectangle in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

//=== Flip ================================================================

/// Mirroring applied when copying a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    #[default]
    None,
    Vertical,
}

//=== Color ===============================================================

/// RGBA color used for text rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

//=== Canvas ==============================================================

/// Presentation backend consumed by the scene.
///
/// Loading and drawing failures are fatal for the caller; implementations
/// report them as [`GameError::AssetLoad`] or [`GameError::Render`] and
/// never retry.
pub trait Canvas {
    /// Loads an image file into a texture.
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, GameError>;

    /// Opens the font used by [`Canvas::render_text`].
    fn load_font(&mut self, path: &Path, point_size: u16) -> Result<(), GameError>;

    /// Renders `text` with the loaded font into a new texture.
    fn render_text(&mut self, text: &str, color: Color) -> Result<TextureHandle, GameError>;

    /// Clears the render target.
    fn clear(&mut self);

    /// Copies `texture` to `dest`, or to the whole target when `dest` is `None`.
    fn draw(&mut self, texture: TextureHandle, dest: Option<Rect>, flip: Flip) -> Result<(), GameError>;

    /// Shows the frame assembled since the last [`Canvas::clear`].
    fn present(&mut self) -> Result<(), GameError>;
}
