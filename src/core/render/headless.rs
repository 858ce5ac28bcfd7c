//=========================================================================
// Headless Canvas
//=========================================================================
//
// Backend that validates assets on disk and records draw commands instead
// of rasterizing them.
//
// Each `present()` moves the commands of the current frame into
// `last_frame`, so callers can inspect exactly what the scene painted.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{Canvas, Color, Flip, Rect, TextureHandle};
use crate::core::error::GameError;

//=== DrawCommand =========================================================

/// One recorded `draw` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub texture: TextureHandle,
    pub dest: Option<Rect>,
    pub flip: Flip,
}

//=== HeadlessCanvas ======================================================

/// Canvas that resolves assets under `asset_root` and records frames.
pub struct HeadlessCanvas {
    asset_root: PathBuf,
    textures: Vec<String>,
    font: Option<(PathBuf, u16)>,
    frame: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl HeadlessCanvas {
    /// Creates a canvas that loads assets relative to `asset_root`.
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        let asset_root = asset_root.into();
        debug!("Headless canvas rooted at {}", asset_root.display());

        Self {
            asset_root,
            textures: Vec::new(),
            font: None,
            frame: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
        }
    }

    //--- Inspection -------------------------------------------------------

    /// Commands of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Human-readable origin of a texture (file path or rendered text).
    pub fn texture_label(&self, texture: TextureHandle) -> Option<&str> {
        self.textures.get(texture.0 as usize).map(String::as_str)
    }

    //--- Internal Helpers -------------------------------------------------

    fn resolve(&self, path: &Path) -> Result<PathBuf, GameError> {
        let full = self.asset_root.join(path);
        let metadata =
            fs::metadata(&full).map_err(|e| GameError::asset_load(&full, e.to_string()))?;

        if !metadata.is_file() {
            return Err(GameError::asset_load(&full, "not a regular file"));
        }
        if metadata.len() == 0 {
            return Err(GameError::asset_load(&full, "file is empty"));
        }

        Ok(full)
    }

    fn register(&mut self, label: String) -> TextureHandle {
        let handle = TextureHandle(self.textures.len() as u32);
        trace!("Registered texture {:?} ({})", handle, label);
        self.textures.push(label);
        handle
    }
}

//=== Canvas Implementation ===============================================

impl Canvas for HeadlessCanvas {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, GameError> {
        let full = self.resolve(path)?;
        Ok(self.register(full.display().to_string()))
    }

    fn load_font(&mut self, path: &Path, point_size: u16) -> Result<(), GameError> {
        let full = self.resolve(path)?;
        debug!("Font {} opened at {}pt", full.display(), point_size);
        self.font = Some((full, point_size));
        Ok(())
    }

    fn render_text(&mut self, text: &str, color: Color) -> Result<TextureHandle, GameError> {
        if self.font.is_none() {
            return Err(GameError::Render(format!("can't render {:?}: no font loaded", text)));
        }
        Ok(self.register(format!("text {:?} {:?}", text, color)))
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw(&mut self, texture: TextureHandle, dest: Option<Rect>, flip: Flip) -> Result<(), GameError> {
        if texture.0 as usize >= self.textures.len() {
            return Err(GameError::Render(format!("unknown texture {:?}", texture)));
        }
        self.frame.push(DrawCommand { texture, dest, flip });
        Ok(())
    }

    fn present(&mut self) -> Result<(), GameError> {
        self.last_frame = std::mem::take(&mut self.frame);
        self.frames_presented += 1;
        trace!(
            "Presented frame {} ({} draw calls)",
            self.frames_presented,
            self.last_frame.len()
        );
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    //--- Test Helpers -----------------------------------------------------

    fn temp_root() -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let dir = std::env::temp_dir().join(format!(
            "flappy-headless-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(dir.join("images")).unwrap();
        dir
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn load_texture_requires_existing_file() {
        let root = temp_root();
        let mut canvas = HeadlessCanvas::new(&root);

        let err = canvas.load_texture(Path::new("images/missing.png")).unwrap_err();
        assert!(matches!(err, GameError::AssetLoad { .. }));
    }

    #[test]
    fn load_texture_rejects_empty_file() {
        let root = temp_root();
        fs::write(root.join("images/empty.png"), b"").unwrap();
        let mut canvas = HeadlessCanvas::new(&root);

        let err = canvas.load_texture(Path::new("images/empty.png")).unwrap_err();
        assert!(err.to_string().contains("file is empty"));
    }

    #[test]
    fn loaded_textures_get_distinct_handles() {
        let root = temp_root();
        fs::write(root.join("images/a.png"), b"png").unwrap();
        fs::write(root.join("images/b.png"), b"png").unwrap();
        let mut canvas = HeadlessCanvas::new(&root);

        let a = canvas.load_texture(Path::new("images/a.png")).unwrap();
        let b = canvas.load_texture(Path::new("images/b.png")).unwrap();

        assert_ne!(a, b);
        assert!(canvas.texture_label(a).unwrap().ends_with("a.png"));
    }

    #[test]
    fn render_text_needs_a_font() {
        let root = temp_root();
        let mut canvas = HeadlessCanvas::new(&root);

        let err = canvas.render_text("Flappy", Color::rgba(255, 100, 0, 255)).unwrap_err();
        assert!(matches!(err, GameError::Render(_)));
    }

    #[test]
    fn present_records_the_frame() {
        let root = temp_root();
        fs::write(root.join("images/a.png"), b"png").unwrap();
        let mut canvas = HeadlessCanvas::new(&root);
        let a = canvas.load_texture(Path::new("images/a.png")).unwrap();

        canvas.clear();
        canvas.draw(a, None, Flip::None).unwrap();
        canvas.draw(a, Some(Rect::new(1, 2, 3, 4)), Flip::Vertical).unwrap();
        canvas.present().unwrap();

        assert_eq!(canvas.frames_presented(), 1);
        assert_eq!(canvas.last_frame().len(), 2);
        assert_eq!(canvas.last_frame()[1].flip, Flip::Vertical);
    }

    #[test]
    fn draw_unknown_texture_is_render_error() {
        let root = temp_root();
        let mut canvas = HeadlessCanvas::new(&root);

        let err = canvas.draw(TextureHandle(7), None, Flip::None).unwrap_err();
        assert!(matches!(err, GameError::Render(_)));
    }
}
