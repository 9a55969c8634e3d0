/// Host-provided font metrics used to size chip labels.
///
/// Implementations must be deterministic and never return a negative width.
pub trait TextMeasurer {
    fn text_width(&self, text: &str) -> f32;
}

/// Fixed advance per character, for tests and headless hosts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    pub char_width: f32,
}

impl MonospacedTextMeasurer {
    pub const DEFAULT_CHAR_WIDTH: f32 = 8.0;

    pub fn new(char_width: f32) -> Self {
        Self { char_width }
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHAR_WIDTH)
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn text_width(&self, text: &str) -> f32 {
        (**self).text_width(text)
    }
}
