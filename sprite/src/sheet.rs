use super::errors::{ErrorKind, Result};
use super::geometry::Region;
use failchain::ensure;
use std::ops::Index;
use std::slice;

/// A fixed, ordered set of regions of one texture, one per animation frame or UI state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    frames: Vec<Region>,
}

impl SpriteSheet {
    pub fn new(frames: Vec<Region>) -> Self {
        SpriteSheet { frames }
    }

    /// `count` frames of `frame_width`x`frame_height` laid out left to right from the origin.
    pub fn strip(frame_width: u32, frame_height: u32, count: usize) -> Self {
        Self::grid(frame_width, frame_height, count, 1)
    }

    /// A `columns`x`rows` grid of equally sized frames, in row-major order.
    pub fn grid(frame_width: u32, frame_height: u32, columns: usize, rows: usize) -> Self {
        let frames = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (row, column)))
            .map(|(row, column)| {
                Region::new(
                    column as i32 * frame_width as i32,
                    row as i32 * frame_height as i32,
                    frame_width,
                    frame_height,
                )
            })
            .collect();
        SpriteSheet { frames }
    }

    /// Splits a `width`x`height` texture into `count` equal frames side by side.
    pub fn split_horizontally(width: u32, height: u32, count: usize) -> Result<Self> {
        ensure!(
            count > 0,
            ErrorKind::Sheet("cannot split a texture into zero frames".to_owned())
        );
        ensure!(
            width as usize % count == 0,
            ErrorKind::Sheet(format!(
                "texture width {} is not divisible into {} frames",
                width, count
            ))
        );
        Ok(Self::strip(width / count as u32, height, count))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<Region> {
        self.frames.get(index).copied()
    }

    pub fn frames(&self) -> &[Region] {
        &self.frames
    }

    pub fn iter(&self) -> slice::Iter<Region> {
        self.frames.iter()
    }
}

impl Index<usize> for SpriteSheet {
    type Output = Region;

    fn index(&self, index: usize) -> &Region {
        &self.frames[index]
    }
}

impl<'a> IntoIterator for &'a SpriteSheet {
    type Item = &'a Region;
    type IntoIter = slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
