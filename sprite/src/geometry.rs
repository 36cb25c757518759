use serde::Deserialize;

/// The colour treated as fully transparent when decoding images.
pub const COLOR_KEY: Color = Color::rgb(0x00, 0xff, 0xff);

/// A rectangle in pixel space.
///
/// Used both for selecting a sub-image of a texture (a sprite region) and for the destination of a
/// draw call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a region of the same size with its top-left corner moved to `(x, y)`.
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Region { x, y, ..self }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Mirroring applied at draw time; the stored pixels are never touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Flip {
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Flip {
    pub fn horizontal(self) -> bool {
        match self {
            Flip::Horizontal | Flip::Both => true,
            Flip::None | Flip::Vertical => false,
        }
    }

    pub fn vertical(self) -> bool {
        match self {
            Flip::Vertical | Flip::Both => true,
            Flip::None | Flip::Horizontal => false,
        }
    }
}

impl Default for Flip {
    fn default() -> Self {
        Flip::None
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    None,
    Blend,
    Add,
    Mod,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}
