/// Drawable area in physical pixels.
///
/// The frame loop sets the GL viewport to `(0, 0, width, height)` every frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Viewport rectangle as the signed `(x, y, width, height)` GL expects.
    ///
    /// Dimensions beyond `i32::MAX` saturate.
    pub fn gl_rect(self) -> (i32, i32, i32, i32) {
        let w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0, 0, w, h)
    }
}
