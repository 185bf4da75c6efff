//! Fixed xterm 256-color palette, decoded once from a packed hex table.

use std::sync::LazyLock;
use thiserror::Error;

/// Number of entries in the terminal palette.
pub const PALETTE_SIZE: usize = 256;

/// Packed `rrggbb` triplets for codes 0..=255, sixteen codes per line.
const PACKED_PALETTE: &str = concat!(
    "000000800000008000808000000080800080008080c0c0c0808080ff000000ff00ffff000000ffff00ff00ffffffffff",
    "00000000005f0000870000af0000d70000ff005f00005f5f005f87005faf005fd7005fff00870000875f0087870087af",
    "0087d70087ff00af0000af5f00af8700afaf00afd700afff00d70000d75f00d78700d7af00d7d700d7ff00ff0000ff5f",
    "00ff8700ffaf00ffd700ffff5f00005f005f5f00875f00af5f00d75f00ff5f5f005f5f5f5f5f875f5faf5f5fd75f5fff",
    "5f87005f875f5f87875f87af5f87d75f87ff5faf005faf5f5faf875fafaf5fafd75fafff5fd7005fd75f5fd7875fd7af",
    "5fd7d75fd7ff5fff005fff5f5fff875fffaf5fffd75fffff87000087005f8700878700af8700d78700ff875f00875f5f",
    "875f87875faf875fd7875fff87870087875f8787878787af8787d78787ff87af0087af5f87af8787afaf87afd787afff",
    "87d70087d75f87d78787d7af87d7d787d7ff87ff0087ff5f87ff8787ffaf87ffd787ffffaf0000af005faf0087af00af",
    "af00d7af00ffaf5f00af5f5faf5f87af5fafaf5fd7af5fffaf8700af875faf8787af87afaf87d7af87ffafaf00afaf5f",
    "afaf87afafafafafd7afafffafd700afd75fafd787afd7afafd7d7afd7ffafff00afff5fafff87afffafafffd7afffff",
    "d70000d7005fd70087d700afd700d7d700ffd75f00d75f5fd75f87d75fafd75fd7d75fffd78700d7875fd78787d787af",
    "d787d7d787ffd7af00d7af5fd7af87d7afafd7afd7d7afffd7d700d7d75fd7d787d7d7afd7d7d7d7d7ffd7ff00d7ff5f",
    "d7ff87d7ffafd7ffd7d7ffffff0000ff005fff0087ff00afff00d7ff00ffff5f00ff5f5fff5f87ff5fafff5fd7ff5fff",
    "ff8700ff875fff8787ff87afff87d7ff87ffffaf00ffaf5fffaf87ffafafffafd7ffafffffd700ffd75fffd787ffd7af",
    "ffd7d7ffd7ffffff00ffff5fffff87ffffafffffd7ffffff0808081212121c1c1c2626263030303a3a3a4444444e4e4e",
    "5858586262626c6c6c7676768080808a8a8a9494949e9e9ea8a8a8b2b2b2bcbcbcc6c6c6d0d0d0dadadae4e4e4eeeeee",
);

static PALETTE: LazyLock<Palette> = LazyLock::new(|| {
    Palette::parse(PACKED_PALETTE)
        .unwrap_or_else(|e| panic!("built-in 256-color palette is malformed: {e}"))
});

/// Error raised when a packed palette description cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("expected {expected} hex digits, found {0}", expected = PALETTE_SIZE * 6)]
    Length(usize),
    #[error("invalid hex digit at offset {offset}")]
    Digit { offset: usize },
}

/// Immutable code -> RGB mapping.
pub struct Palette {
    entries: [[u8; 3]; PALETTE_SIZE],
}

impl Palette {
    /// The process-wide terminal palette.
    pub fn global() -> &'static Palette {
        &PALETTE
    }

    /// Decode `PALETTE_SIZE` packed `rrggbb` triplets.
    pub fn parse(packed: &str) -> Result<Self, PaletteError> {
        let bytes = packed.as_bytes();
        if bytes.len() != PALETTE_SIZE * 6 {
            return Err(PaletteError::Length(bytes.len()));
        }

        let mut entries = [[0u8; 3]; PALETTE_SIZE];
        for (code, triplet) in bytes.chunks_exact(6).enumerate() {
            for (channel, pair) in triplet.chunks_exact(2).enumerate() {
                let offset = code * 6 + channel * 2;
                let hi = hex_value(pair[0]).ok_or(PaletteError::Digit { offset })?;
                let lo = hex_value(pair[1]).ok_or(PaletteError::Digit { offset: offset + 1 })?;
                entries[code][channel] = hi << 4 | lo;
            }
        }
        Ok(Self { entries })
    }

    #[inline]
    pub fn lookup(&self, code: u8) -> [u8; 3] {
        self.entries[code as usize]
    }

    /// All `(code, rgb)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, [u8; 3])> + '_ {
        (0..=u8::MAX).zip(self.entries.iter().copied())
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
