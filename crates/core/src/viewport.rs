/// Widths below this many logical pixels are treated as a phone-sized viewport.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportClassifier {
    breakpoint: f32,
}

impl ViewportClassifier {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint: breakpoint.max(0.0),
        }
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }

    pub fn is_mobile(&self, width: f32) -> bool {
        width < self.breakpoint
    }
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}
