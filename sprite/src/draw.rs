use super::geometry::{Flip, Point, Region};

/// Optional parameters of a texture draw.
///
/// The default draws the whole texture, unrotated and unmirrored, pivoting around the centre of the
/// destination.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawParams {
    pub region: Option<Region>,
    pub angle: f64,
    pub pivot: Option<Point>,
    pub flip: Flip,
}

impl DrawParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Rotation in degrees, clockwise.
    pub fn rotated(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Pivot relative to the top-left corner of the destination.
    pub fn pivot(mut self, pivot: Point) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn flipped(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }
}

impl Default for DrawParams {
    fn default() -> Self {
        DrawParams {
            region: None,
            angle: 0.0,
            pivot: None,
            flip: Flip::None,
        }
    }
}

/// A resolved draw call, ready to be submitted to a `DrawTarget`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub source: Option<Region>,
    pub destination: Region,
    pub angle: f64,
    pub pivot: Option<Point>,
    pub flip: Flip,
}

impl DrawCall {
    /// Resolves `params` against a texture of `texture_size` drawn at `(x, y)`.
    ///
    /// The destination is never scaled: it takes the size of the source region, or of the whole
    /// texture if no region was given.
    pub fn resolve(x: i32, y: i32, texture_size: (u32, u32), params: &DrawParams) -> Self {
        let (width, height) = params.region.map_or(texture_size, |region| region.size());
        DrawCall {
            source: params.region,
            destination: Region::new(x, y, width, height),
            angle: params.angle,
            pivot: params.pivot,
            flip: params.flip,
        }
    }

    pub fn pivot_or_center(&self) -> Point {
        self.pivot.unwrap_or_else(|| self.destination.center())
    }
}

#[cfg(test)]
mod test {
    use super::{DrawCall, DrawParams};
    use crate::geometry::{Flip, Point, Region};

    #[test]
    fn whole_texture_without_region() {
        let call = DrawCall::resolve(5, -3, (256, 64), &DrawParams::default());
        assert_eq!(call.source, None);
        assert_eq!(call.destination, Region::new(5, -3, 256, 64));
        assert_eq!(call.angle, 0.0);
        assert_eq!(call.flip, Flip::None);
        assert_eq!(call.pivot_or_center(), Point::new(128, 32));
    }

    #[test]
    fn region_decides_destination_size() {
        let region = Region::new(128, 0, 64, 64);
        let params = DrawParams::new()
            .region(region)
            .rotated(-60.0)
            .pivot(Point::new(1, 2))
            .flipped(Flip::Vertical);
        let call = DrawCall::resolve(10, 20, (256, 64), &params);
        assert_eq!(call.source, Some(region));
        assert_eq!(call.destination, Region::new(10, 20, 64, 64));
        assert_eq!(call.angle, -60.0);
        assert_eq!(call.pivot_or_center(), Point::new(1, 2));
        assert_eq!(call.flip, Flip::Vertical);
    }
}
