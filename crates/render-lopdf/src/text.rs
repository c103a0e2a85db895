use lopdf::{Object, StringFormat};

/// Maps a character to its Windows-1252 byte, as declared by the
/// `WinAnsiEncoding` font dictionaries.
fn win_ansi_byte(c: char) -> Option<u8> {
    let code = u32::from(c);
    if code < 0x80 || (0xA0..=0xFF).contains(&code) {
        return u8::try_from(code).ok();
    }

    let byte = match code {
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        // C1 controls have no glyph in WinAnsi.
        _ => return None,
    };
    Some(byte)
}

/// Encodes text for a WinAnsi Type1 font. Unmappable characters become `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}

/// Encodes an information dictionary string as Latin-1. The PDFDocEncoding
/// block 0x80-0x9F differs from Latin-1, so C1 code points become `?` too.
fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ (0x00..=0x7F | 0xA0..=0xFF) => u8::try_from(code).unwrap_or(b'?'),
            _ => b'?',
        })
        .collect()
}

/// Builds a PDF text string for the document information dictionary.
///
/// ASCII stays a literal string. Anything else is UTF-16BE with a byte order
/// mark when unicode is enabled, and Latin-1 otherwise.
pub(crate) fn text_string(value: &str, unicode: bool) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }

    if unicode {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in value.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    } else {
        Object::String(encode_latin1(value), StringFormat::Literal)
    }
}
