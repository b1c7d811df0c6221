//! # Code Page 850 Encoding
//!
//! Converts Unicode strings to the IBM code page 850 (DOS Latin-1) single-byte
//! encoding used by the printer's character ROM. Code page 850 is the
//! power-on default on most ESC/POS printers and covers the accented vowels,
//! `ñ`/`Ñ`, `¿` and `¡` needed for Spanish and other western European text.
//!
//! ASCII (U+0000–U+007F) passes through unchanged. The upper half maps 128
//! Unicode code points to bytes 0x80–0xFF. Anything else is an
//! [`EncodeError::UnsupportedCharacter`]; there is no replacement character.

use crate::error::EncodeError;

/// Unicode code points for bytes 0x80–0xFF.
///
/// Reference: IBM Code Page 850 character set.
const UPPER_HALF: [char; 128] = [
    // 0x80–0x8F
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90–0x9F
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', 'ø', '£', 'Ø', '×', 'ƒ',
    // 0xA0–0xAF
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '®', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0–0xBF
    '░', '▒', '▓', '│', '┤', 'Á', 'Â', 'À', '©', '╣', '║', '╗', '╝', '¢', '¥', '┐',
    // 0xC0–0xCF
    '└', '┴', '┬', '├', '─', '┼', 'ã', 'Ã', '╚', '╔', '╩', '╦', '╠', '═', '╬', '¤',
    // 0xD0–0xDF
    'ð', 'Ð', 'Ê', 'Ë', 'È', 'ı', 'Í', 'Î', 'Ï', '┘', '┌', '█', '▄', '¦', 'Ì', '▀',
    // 0xE0–0xEF
    'Ó', 'ß', 'Ô', 'Ò', 'õ', 'Õ', 'µ', 'þ', 'Þ', 'Ú', 'Û', 'Ù', 'ý', 'Ý', '¯', '´',
    // 0xF0–0xFF (0xF0 is a soft hyphen, 0xFF a non-breaking space)
    '\u{00AD}', '±', '‗', '¾', '¶', '§', '÷', '¸', '°', '¨', '·', '¹', '³', '²', '■',
    '\u{00A0}',
];

/// Encode a Unicode string as code page 850 bytes.
///
/// Fails on the first character with no code page 850 representation;
/// `position` in the error is the character index (not the byte offset).
///
/// ## Example
///
/// ```
/// use ticketera::protocol::cp850;
///
/// assert_eq!(cp850::encode("Ñandú").unwrap(), vec![0xA5, b'a', b'n', b'd', 0xA3]);
/// assert!(cp850::encode("€").is_err());
/// ```
pub fn encode(s: &str) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(s.len());
    for (position, ch) in s.chars().enumerate() {
        match unicode_to_cp850(ch) {
            Some(byte) => out.push(byte),
            None => {
                return Err(EncodeError::UnsupportedCharacter {
                    character: ch,
                    position,
                });
            }
        }
    }
    Ok(out)
}

/// Decode code page 850 bytes back to a Unicode string.
///
/// Every byte has a mapping, so decoding never fails.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| cp850_to_unicode(b)).collect()
}

/// Whether `ch` can be printed with code page 850.
pub fn is_supported(ch: char) -> bool {
    unicode_to_cp850(ch).is_some()
}

fn unicode_to_cp850(ch: char) -> Option<u8> {
    if (ch as u32) < 0x80 {
        return Some(ch as u8);
    }
    UPPER_HALF
        .iter()
        .position(|&c| c == ch)
        .map(|idx| 0x80 + idx as u8)
}

fn cp850_to_unicode(byte: u8) -> char {
    if byte < 0x80 {
        byte as char
    } else {
        UPPER_HALF[(byte - 0x80) as usize]
    }
}
