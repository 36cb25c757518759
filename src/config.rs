use super::errors::{Result, ResultExt};
use engine::WindowConfig;
use log::info;
use serde::Deserialize;
use sprite::Color;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Color,
}

impl Default for WindowSection {
    fn default() -> Self {
        WindowSection {
            title: "My first window".to_owned(),
            width: 480,
            height: 640,
            clear_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FontSection {
    pub path: PathBuf,
    pub point_size: u16,
}

impl Default for FontSection {
    fn default() -> Self {
        FontSection {
            path: PathBuf::from("assets/OpenSans-Regular.ttf"),
            point_size: 72,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TextSection {
    pub message: String,
    pub color: Color,
}

impl Default for TextSection {
    fn default() -> Self {
        TextSection {
            message: "DIT IS EEN STUK TEXT".to_owned(),
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SpriteSection {
    pub image: PathBuf,
    pub frames: usize,
    pub ticks_per_frame: usize,
}

impl Default for SpriteSection {
    fn default() -> Self {
        SpriteSection {
            image: PathBuf::from("assets/hello2.png"),
            frames: 4,
            ticks_per_frame: 4,
        }
    }
}

/// Settings shared by all lessons. Every section and key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub window: WindowSection,
    pub font: FontSection,
    pub text: TextSection,
    pub sprites: SpriteSection,
}

impl LessonConfig {
    pub fn from_file<PathT: AsRef<Path> + ?Sized>(path: &PathT) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading lesson config {:?}...", path);
        let contents = fs::read_to_string(path)
            .err_context(|_| format!("Cannot read config file {:?}.", path))?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        toml::from_str(text).err_context(|_| "Malformed lesson config.")
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            width: self.window.width,
            height: self.window.height,
            title: self.window.title.clone(),
            clear_color: self.window.clear_color,
            ..WindowConfig::default()
        }
    }
}
