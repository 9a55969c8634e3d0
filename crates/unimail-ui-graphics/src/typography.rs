//! Text direction and alignment (data only, no shaping)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Estimates the paragraph direction from the first strong character.
    ///
    /// Text without any strong character (digits, punctuation, empty) is
    /// treated as left-to-right.
    pub fn detect(text: &str) -> Self {
        for ch in text.chars() {
            if is_strong_rtl(ch) {
                return TextDirection::Rtl;
            }
            if ch.is_alphabetic() {
                return TextDirection::Ltr;
            }
        }
        TextDirection::Ltr
    }

    /// Alignment that puts the start of the text on its leading edge.
    pub fn start_align(self) -> TextAlign {
        match self {
            TextDirection::Ltr => TextAlign::Left,
            TextDirection::Rtl => TextAlign::Right,
        }
    }
}

// Hebrew, Arabic, Syriac, Thaana, NKo, Samaritan, Mandaic and the
// Hebrew/Arabic presentation forms.
fn is_strong_rtl(ch: char) -> bool {
    matches!(
        ch as u32,
        0x0590..=0x08FF | 0xFB1D..=0xFDFF | 0xFE70..=0xFEFF | 0x10800..=0x10FFF | 0x1E800..=0x1EFFF
    )
}
