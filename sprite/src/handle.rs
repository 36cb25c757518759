use super::backend::{DrawTarget, GpuTexture, ImageLoader, TextLoader, Upload};
use super::draw::{DrawCall, DrawParams};
use super::errors::Result;
use super::geometry::{BlendMode, Color, COLOR_KEY};
use log::{debug, error, warn};
use std::path::Path;

/// Owns at most one texture and remembers its pixel dimensions.
///
/// A handle is either empty, reporting a size of `(0, 0)`, or loaded. Every load first releases
/// the texture currently held, so a handle never owns more than one texture; a failed load leaves
/// the handle empty. The texture is released when the handle is dropped.
///
/// Modulating or drawing an empty handle is a no-op which is logged as a warning.
pub struct TextureHandle<TextureT> {
    texture: Option<TextureT>,
    width: u32,
    height: u32,
}

impl<TextureT: GpuTexture> TextureHandle<TextureT> {
    pub fn new() -> Self {
        TextureHandle {
            texture: None,
            width: 0,
            height: 0,
        }
    }

    /// Decodes the image at `path`, keying out `COLOR_KEY`, and takes ownership of the uploaded
    /// texture.
    pub fn load_from_image<LoaderT, PathT>(&mut self, loader: &LoaderT, path: &PathT) -> Result<()>
    where
        LoaderT: ImageLoader<Texture = TextureT>,
        PathT: AsRef<Path> + ?Sized,
    {
        self.release();
        let path = path.as_ref();
        let upload = loader
            .load_image(path, Some(COLOR_KEY))
            .map_err(|e| {
                error!("{}", e);
                e
            })?;
        debug!(
            "Loaded image {:?} as {}x{} texture.",
            path, upload.width, upload.height
        );
        self.store(upload);
        Ok(())
    }

    /// Renders `text` with the loader's font and takes ownership of the uploaded texture.
    pub fn load_from_text<LoaderT>(&mut self, loader: &LoaderT, text: &str, color: Color) -> Result<()>
    where
        LoaderT: TextLoader<Texture = TextureT>,
    {
        self.release();
        let upload = loader.load_text(text, color).map_err(|e| {
            error!("{}", e);
            e
        })?;
        debug!(
            "Rendered text {:?} as {}x{} texture.",
            text, upload.width, upload.height
        );
        self.store(upload);
        Ok(())
    }

    pub fn release(&mut self) {
        if self.texture.take().is_some() {
            self.width = 0;
            self.height = 0;
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn texture(&self) -> Option<&TextureT> {
        self.texture.as_ref()
    }

    pub fn set_color_mod(&mut self, red: u8, green: u8, blue: u8) {
        if let Some(texture) = self.loaded_mut("set_color_mod") {
            texture.set_color_mod(red, green, blue);
        }
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        if let Some(texture) = self.loaded_mut("set_blend_mode") {
            texture.set_blend_mode(mode);
        }
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        if let Some(texture) = self.loaded_mut("set_alpha") {
            texture.set_alpha_mod(alpha);
        }
    }

    /// The call `draw` would submit, or `None` if the handle is empty.
    pub fn draw_call(&self, x: i32, y: i32, params: &DrawParams) -> Option<DrawCall> {
        self.texture
            .as_ref()
            .map(|_| DrawCall::resolve(x, y, self.size(), params))
    }

    /// Draws the texture with its top-left corner at `(x, y)`.
    pub fn draw<TargetT>(&self, target: &mut TargetT, x: i32, y: i32, params: &DrawParams) -> Result<()>
    where
        TargetT: DrawTarget<TextureT> + ?Sized,
    {
        match self.texture {
            Some(ref texture) => {
                target.draw_texture(texture, &DrawCall::resolve(x, y, self.size(), params))
            }
            None => {
                warn!("draw called on an empty texture handle, nothing drawn.");
                Ok(())
            }
        }
    }

    fn store(&mut self, upload: Upload<TextureT>) {
        let Upload {
            texture,
            width,
            height,
        } = upload;
        self.texture = Some(texture);
        self.width = width;
        self.height = height;
    }

    fn loaded_mut(&mut self, operation: &str) -> Option<&mut TextureT> {
        if self.texture.is_none() {
            warn!("{} called on an empty texture handle, ignored.", operation);
        }
        self.texture.as_mut()
    }
}

impl<TextureT: GpuTexture> Default for TextureHandle<TextureT> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::TextureHandle;
    use crate::backend::{DrawTarget, GpuTexture, ImageLoader, TextLoader, Upload};
    use crate::draw::{DrawCall, DrawParams};
    use crate::errors::{ErrorKind, Result};
    use crate::geometry::{BlendMode, Color, Flip, Region, COLOR_KEY};
    use crate::sheet::SpriteSheet;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    struct FakeTexture {
        live: Rc<Cell<usize>>,
        color_mod: (u8, u8, u8),
        blend_mode: BlendMode,
        alpha: u8,
    }

    impl Drop for FakeTexture {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl GpuTexture for FakeTexture {
        fn set_color_mod(&mut self, red: u8, green: u8, blue: u8) {
            self.color_mod = (red, green, blue);
        }

        fn set_blend_mode(&mut self, mode: BlendMode) {
            self.blend_mode = mode;
        }

        fn set_alpha_mod(&mut self, alpha: u8) {
            self.alpha = alpha;
        }
    }

    #[derive(Default)]
    struct FakeLoader {
        images: HashMap<PathBuf, (u32, u32)>,
        live: Rc<Cell<usize>>,
        color_keys: RefCell<Vec<Option<Color>>>,
    }

    impl FakeLoader {
        fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
            self.images.insert(PathBuf::from(path), (width, height));
            self
        }

        fn upload(&self, width: u32, height: u32) -> Upload<FakeTexture> {
            self.live.set(self.live.get() + 1);
            Upload {
                texture: FakeTexture {
                    live: self.live.clone(),
                    color_mod: (255, 255, 255),
                    blend_mode: BlendMode::None,
                    alpha: 255,
                },
                width,
                height,
            }
        }
    }

    impl ImageLoader for FakeLoader {
        type Texture = FakeTexture;

        fn load_image(&self, path: &Path, color_key: Option<Color>) -> Result<Upload<FakeTexture>> {
            self.color_keys.borrow_mut().push(color_key);
            let &(width, height) = self
                .images
                .get(path)
                .ok_or_else(|| ErrorKind::decode(path)("no such file"))?;
            Ok(self.upload(width, height))
        }
    }

    impl TextLoader for FakeLoader {
        fn load_text(&self, text: &str, _color: Color) -> Result<Upload<FakeTexture>> {
            if text.is_empty() {
                return Err(ErrorKind::render_text(text)("Text has zero width").into());
            }
            Ok(self.upload(12 * text.chars().count() as u32, 24))
        }
    }

    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<DrawCall>,
    }

    impl DrawTarget<FakeTexture> for RecordingTarget {
        fn draw_texture(&mut self, _texture: &FakeTexture, call: &DrawCall) -> Result<()> {
            self.calls.push(*call);
            Ok(())
        }
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn load_records_source_dimensions() {
        init_logging();
        let loader = FakeLoader::default().with_image("sprite.png", 256, 64);
        let mut handle = TextureHandle::new();
        assert_eq!(handle.size(), (0, 0));
        assert!(!handle.is_loaded());

        handle.load_from_image(&loader, "sprite.png").unwrap();
        assert!(handle.is_loaded());
        assert_eq!(handle.width(), 256);
        assert_eq!(handle.height(), 64);
        assert_eq!(*loader.color_keys.borrow(), vec![Some(COLOR_KEY)]);
    }

    #[test]
    fn release_always_yields_zero_size() {
        init_logging();
        let loader = FakeLoader::default().with_image("a.png", 10, 20);
        let mut handle = TextureHandle::new();
        handle.release();
        assert_eq!(handle.size(), (0, 0));

        handle.load_from_image(&loader, "a.png").unwrap();
        handle.release();
        assert_eq!(handle.size(), (0, 0));
        assert!(!handle.is_loaded());
        assert_eq!(loader.live.get(), 0);

        handle.release();
        assert_eq!(handle.size(), (0, 0));
    }

    #[test]
    fn reload_owns_exactly_one_texture() {
        init_logging();
        let loader = FakeLoader::default()
            .with_image("a.png", 10, 20)
            .with_image("b.png", 30, 40);
        let mut handle = TextureHandle::new();
        handle.load_from_image(&loader, "a.png").unwrap();
        handle.load_from_image(&loader, "b.png").unwrap();
        assert_eq!(loader.live.get(), 1);
        assert_eq!(handle.size(), (30, 40));

        handle.load_from_text(&loader, "hello", Color::BLACK).unwrap();
        assert_eq!(loader.live.get(), 1);
        assert_eq!(handle.size(), (60, 24));

        drop(handle);
        assert_eq!(loader.live.get(), 0);
    }

    #[test]
    fn failed_load_leaves_handle_empty() {
        init_logging();
        let loader = FakeLoader::default().with_image("a.png", 10, 20);
        let mut handle = TextureHandle::new();
        handle.load_from_image(&loader, "a.png").unwrap();

        let error = handle
            .load_from_image(&loader, "does-not-exist.png")
            .unwrap_err();
        assert!(error.to_string().contains("does-not-exist.png"));
        assert!(!handle.is_loaded());
        assert_eq!(handle.size(), (0, 0));
        assert_eq!(loader.live.get(), 0);

        handle.load_from_image(&loader, "a.png").unwrap();
        assert!(handle.load_from_text(&loader, "", Color::BLACK).is_err());
        assert!(!handle.is_loaded());
        assert_eq!(loader.live.get(), 0);
    }

    #[test]
    fn draw_without_region_uses_texture_size() {
        init_logging();
        let loader = FakeLoader::default().with_image("a.png", 100, 50);
        let mut handle = TextureHandle::new();
        handle.load_from_image(&loader, "a.png").unwrap();

        let mut target = RecordingTarget::default();
        handle
            .draw(&mut target, 3, 4, &DrawParams::new().rotated(90.0))
            .unwrap();
        assert_eq!(target.calls.len(), 1);
        assert_eq!(target.calls[0].destination, Region::new(3, 4, 100, 50));
        assert_eq!(target.calls[0].source, None);
        assert_eq!(target.calls[0].angle, 90.0);
    }

    #[test]
    fn sprite_sheet_frame_draw() {
        init_logging();
        let loader = FakeLoader::default().with_image("sprite.png", 256, 64);
        let mut handle = TextureHandle::new();
        handle.load_from_image(&loader, "sprite.png").unwrap();
        assert_eq!(handle.size(), (256, 64));

        let sheet = SpriteSheet::split_horizontally(handle.width(), handle.height(), 4).unwrap();
        assert_eq!(sheet.len(), 4);
        assert!(sheet.iter().all(|region| region.size() == (64, 64)));

        let mut target = RecordingTarget::default();
        let params = DrawParams::new().region(sheet[2]).flipped(Flip::Horizontal);
        handle.draw(&mut target, 10, 20, &params).unwrap();
        assert_eq!(target.calls[0].destination, Region::new(10, 20, 64, 64));
        assert_eq!(target.calls[0].source, Some(Region::new(128, 0, 64, 64)));
        assert_eq!(target.calls[0].flip, Flip::Horizontal);
        assert_eq!(handle.draw_call(10, 20, &params), Some(target.calls[0]));
    }

    #[test]
    fn empty_handle_is_a_no_op() {
        init_logging();
        let mut handle = TextureHandle::<FakeTexture>::new();
        let mut target = RecordingTarget::default();
        handle.set_color_mod(1, 2, 3);
        handle.set_blend_mode(BlendMode::Blend);
        handle.set_alpha(7);
        handle.draw(&mut target, 0, 0, &DrawParams::new()).unwrap();
        assert!(target.calls.is_empty());
        assert_eq!(handle.draw_call(0, 0, &DrawParams::new()), None);
    }

    #[test]
    fn modulation_reaches_texture() {
        init_logging();
        let loader = FakeLoader::default().with_image("a.png", 1, 1);
        let mut handle = TextureHandle::new();
        handle.load_from_image(&loader, "a.png").unwrap();
        handle.set_color_mod(10, 20, 30);
        handle.set_blend_mode(BlendMode::Blend);
        handle.set_alpha(128);

        let texture = handle.texture().unwrap();
        assert_eq!(texture.color_mod, (10, 20, 30));
        assert_eq!(texture.blend_mode, BlendMode::Blend);
        assert_eq!(texture.alpha, 128);
    }
}
