// SPDX-License-Identifier: GPL-3.0-only

//! Octal escaping used by the kernel for path fields in mountinfo.
//!
//! The kernel writes space, tab, newline and backslash as a backslash
//! followed by three octal digits (`\040`, `\011`, `\012`, `\134`). Every
//! other byte, including the bytes of multi-byte UTF-8 characters, is
//! written as-is.

use crate::error::{MountInfoError, Result};

const ESCAPED_CHARS: &[char] = &[' ', '\t', '\n', '\\'];

/// Decode `\ooo` escapes back to raw bytes, then validate the result as UTF-8.
///
/// Decoding is byte-level: an escape may produce one byte of a multi-byte
/// character whose remaining bytes were written literally.
pub fn unescape_mount_field(value: &str) -> Result<String> {
    let bytes = value.as_bytes();
    let mut output = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] != b'\\' {
            output.push(bytes[index]);
            index += 1;
            continue;
        }

        let digits = bytes
            .get(index + 1..index + 4)
            .filter(|digits| digits.iter().all(|b| (b'0'..=b'7').contains(b)))
            .ok_or_else(|| {
                MountInfoError::encoding(
                    value,
                    format!("backslash at byte {index} is not followed by three octal digits"),
                )
            })?;

        let code = digits
            .iter()
            .fold(0u16, |acc, digit| acc * 8 + u16::from(digit - b'0'));
        let byte = u8::try_from(code).map_err(|_| {
            MountInfoError::encoding(value, format!("escape \\{code:o} exceeds one byte"))
        })?;

        output.push(byte);
        index += 4;
    }

    String::from_utf8(output)
        .map_err(|e| MountInfoError::encoding(value, format!("invalid UTF-8: {e}")))
}

/// Encode a path the way the kernel writes it into mountinfo.
pub fn escape_mount_field(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for c in value.chars() {
        if ESCAPED_CHARS.contains(&c) {
            output.push_str(&format!("\\{:03o}", c as u32));
        } else {
            output.push(c);
        }
    }
    output
}
