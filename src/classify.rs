use serde::Serialize;

/// Category of a single byte, as shown in both visualizations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Visible ASCII, space (0x20) through tilde (0x7E)
    Printable,
    /// Control characters, DEL and every byte with the high bit set
    NonPrintable,
}

/// Classifies a byte. Total over `0..=255`.
pub fn classify(byte: u8) -> Category {
    match byte {
        0x20..=0x7E => Category::Printable,
        _ => Category::NonPrintable,
    }
}

impl Category {
    pub fn is_printable(self) -> bool {
        self == Category::Printable
    }
}
