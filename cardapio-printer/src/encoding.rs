//! CP860 encoding utilities for Portuguese thermal printers
//!
//! Epson-compatible hardware prints Portuguese accents through code page
//! PC860 (selected with `ESC t 3` by default, configurable because clone
//! printers move the table index around). This module provides:
//! - The Unicode -> CP860 lookup table
//! - Total string encoding (exactly one byte per printed character, with
//!   decomposed base+mark pairs composed first)
//! - Diacritic stripping for lines printed outside the code page
//! - Width/pad helpers for column layout (CP860 is single-byte)

/// Map a Unicode character to its CP860 byte value.
///
/// Covers the Portuguese accented alphabet plus the punctuation and symbol
/// range receipts actually use. Characters outside the table go through the
/// [`encode_char`] fallback chain.
pub fn cp860_byte(ch: char) -> Option<u8> {
    match ch {
        'Ç' => Some(0x80),
        'ü' => Some(0x81),
        'é' => Some(0x82),
        'â' => Some(0x83),
        'ã' => Some(0x84),
        'à' => Some(0x85),
        'Á' => Some(0x86),
        'ç' => Some(0x87),
        'ê' => Some(0x88),
        'Ê' => Some(0x89),
        'è' => Some(0x8A),
        'Í' => Some(0x8B),
        'Ô' => Some(0x8C),
        'ì' => Some(0x8D),
        'Ã' => Some(0x8E),
        'Â' => Some(0x8F),
        'É' => Some(0x90),
        'À' => Some(0x91),
        'È' => Some(0x92),
        'ô' => Some(0x93),
        'õ' => Some(0x94),
        'ò' => Some(0x95),
        'Ú' => Some(0x96),
        'ù' => Some(0x97),
        'Ì' => Some(0x98),
        'Õ' => Some(0x99),
        'Ü' => Some(0x9A),
        '¢' => Some(0x9B),
        '£' => Some(0x9C),
        'Ù' => Some(0x9D),
        'Ó' => Some(0x9F),
        'á' => Some(0xA0),
        'í' => Some(0xA1),
        'ó' => Some(0xA2),
        'ú' => Some(0xA3),
        'ñ' => Some(0xA4),
        'Ñ' => Some(0xA5),
        'ª' => Some(0xA6),
        'º' => Some(0xA7),
        '¿' => Some(0xA8),
        'Ò' => Some(0xA9),
        '¡' => Some(0xAD),
        '«' => Some(0xAE),
        '»' => Some(0xAF),
        'µ' => Some(0xE6),
        '±' => Some(0xF1),
        '÷' => Some(0xF6),
        '°' => Some(0xF8),
        '·' => Some(0xFA),
        '²' => Some(0xFD),
        _ => None,
    }
}

/// Strip the diacritic from an accented Latin letter, returning the ASCII
/// base letter. `None` for characters that are not accented Latin letters.
pub fn fold_diacritic(ch: char) -> Option<char> {
    let base = match ch {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Ç' => 'C',
        'ç' => 'c',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ý' => 'Y',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(base)
}

/// Combining Diacritical Marks block (what NFD input attaches to letters).
fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}

/// Compose a base letter with a combining mark into its precomposed form,
/// for the letters the receipt alphabet uses. `None` for pairs outside it.
fn compose(base: char, mark: char) -> Option<char> {
    let composed = match (mark, base) {
        ('\u{0300}', 'a') => 'à',
        ('\u{0300}', 'A') => 'À',
        ('\u{0300}', 'e') => 'è',
        ('\u{0300}', 'E') => 'È',
        ('\u{0300}', 'i') => 'ì',
        ('\u{0300}', 'I') => 'Ì',
        ('\u{0300}', 'o') => 'ò',
        ('\u{0300}', 'O') => 'Ò',
        ('\u{0300}', 'u') => 'ù',
        ('\u{0300}', 'U') => 'Ù',
        ('\u{0301}', 'a') => 'á',
        ('\u{0301}', 'A') => 'Á',
        ('\u{0301}', 'e') => 'é',
        ('\u{0301}', 'E') => 'É',
        ('\u{0301}', 'i') => 'í',
        ('\u{0301}', 'I') => 'Í',
        ('\u{0301}', 'o') => 'ó',
        ('\u{0301}', 'O') => 'Ó',
        ('\u{0301}', 'u') => 'ú',
        ('\u{0301}', 'U') => 'Ú',
        ('\u{0301}', 'y') => 'ý',
        ('\u{0301}', 'Y') => 'Ý',
        ('\u{0302}', 'a') => 'â',
        ('\u{0302}', 'A') => 'Â',
        ('\u{0302}', 'e') => 'ê',
        ('\u{0302}', 'E') => 'Ê',
        ('\u{0302}', 'i') => 'î',
        ('\u{0302}', 'I') => 'Î',
        ('\u{0302}', 'o') => 'ô',
        ('\u{0302}', 'O') => 'Ô',
        ('\u{0302}', 'u') => 'û',
        ('\u{0302}', 'U') => 'Û',
        ('\u{0303}', 'a') => 'ã',
        ('\u{0303}', 'A') => 'Ã',
        ('\u{0303}', 'o') => 'õ',
        ('\u{0303}', 'O') => 'Õ',
        ('\u{0303}', 'n') => 'ñ',
        ('\u{0303}', 'N') => 'Ñ',
        ('\u{0308}', 'a') => 'ä',
        ('\u{0308}', 'A') => 'Ä',
        ('\u{0308}', 'e') => 'ë',
        ('\u{0308}', 'E') => 'Ë',
        ('\u{0308}', 'i') => 'ï',
        ('\u{0308}', 'I') => 'Ï',
        ('\u{0308}', 'o') => 'ö',
        ('\u{0308}', 'O') => 'Ö',
        ('\u{0308}', 'u') => 'ü',
        ('\u{0308}', 'U') => 'Ü',
        ('\u{0308}', 'y') => 'ÿ',
        ('\u{0327}', 'c') => 'ç',
        ('\u{0327}', 'C') => 'Ç',
        _ => return None,
    };
    Some(composed)
}

/// Replace accented letters with their base letter, leaving everything else
/// untouched. Handles both precomposed and decomposed (NFD) input: combining
/// marks are dropped, their base letter survives. Used for the receipt
/// title, where code-page negotiation in double-size mode proved unreliable
/// on target hardware.
pub fn strip_accents(s: &str) -> String {
    s.chars()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| fold_diacritic(c).unwrap_or(c))
        .collect()
}

/// Encode one character to CP860.
///
/// Fallback chain: ASCII/control passthrough -> table hit -> stripped base
/// letter -> `?`. Total: every input character produces exactly one byte.
pub fn encode_char(ch: char) -> u8 {
    let code = ch as u32;
    if code < 0x80 {
        return code as u8;
    }
    if let Some(byte) = cp860_byte(ch) {
        return byte;
    }
    if let Some(base) = fold_diacritic(ch) {
        // Base letters are ASCII by construction.
        return base as u8;
    }
    b'?'
}

/// Encode a string to CP860 bytes: one byte per printed character, never
/// fails. Decomposed (NFD) input is composed first, so a base letter and its
/// combining mark collapse into the single CP860 byte; a lone combining mark
/// encodes as `?`.
pub fn encode_cp860(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(mut ch) = chars.next() {
        while let Some(&mark) = chars.peek() {
            let Some(composed) = compose(ch, mark) else {
                break;
            };
            ch = composed;
            chars.next();
        }
        out.push(encode_char(ch));
    }
    out
}

/// Printed width of a string (CP860 is single-byte, so width = char count).
pub fn cp860_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to a maximum printed width.
pub fn truncate_chars(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad a string to a specific printed width.
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_chars(s: &str, width: usize, align_right: bool) -> String {
    let current = cp860_width(s);
    if current >= width {
        return truncate_chars(s, width);
    }
    let spaces = width - current;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}
