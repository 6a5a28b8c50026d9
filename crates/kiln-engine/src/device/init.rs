use crate::coords::Viewport;

/// What to ask the platform for when opening the window and its GL context.
///
/// The profile is always core; everything else about the context is read
/// from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    pub title: String,

    /// Inner window size in physical pixels.
    pub width: u32,
    pub height: u32,

    /// Requested core-profile version as `(major, minor)`.
    pub gl_version: (u8, u8),

    /// Depth buffer bits requested from the display config.
    pub depth_bits: u8,

    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            title: "kiln".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            depth_bits: 24,
            vsync: true,
        }
    }
}

impl ContextConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}
