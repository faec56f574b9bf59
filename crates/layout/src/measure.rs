use dom::classify::ZWSP;

/// Text metrics provider.
pub trait TextMeasurer {
    /// Advance width of `text` in px.
    fn measure(&self, text: &str) -> f32;

    /// Height of one line box in px.
    fn line_height(&self) -> f32;
}

/// Monospace metrics: every visible character has the same advance.
///
/// Zero width spaces measure zero so caret containers do not shift content.
#[derive(Clone, Copy, Debug)]
pub struct FixedWidthMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self {
            char_width: 10.0,
            line_height: 20.0,
        }
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str) -> f32 {
        text.chars().filter(|&c| c != ZWSP).count() as f32 * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
