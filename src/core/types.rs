/// Horizontal extent of the timeline surface, observed from the host layout.
///
/// A zero width means the surface has not been laid out yet; the engine
/// produces no ticks and defers its initial fit until the width is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }
}
