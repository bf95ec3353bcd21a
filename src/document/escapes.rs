use crate::document::error::{EscapeError, EscapeErrorKind};
use crate::document::number;

/// Decodes the escape sequence whose backslash sits at `pos`. Returns the
/// decoded character and the number of input bytes the sequence occupies.
pub(super) fn decode_escape(buffer: &[u8], pos: usize) -> Result<(char, usize), EscapeError> {
    let Some(&next) = buffer.get(pos + 1) else {
        return Err(EscapeError { kind: EscapeErrorKind::UnexpectedEof, pos });
    };

    let ch = match next {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\x08',
        b'f' => '\x0C',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => return decode_unicode(buffer, pos),
        _ => {
            return Err(EscapeError {
                kind: EscapeErrorKind::UnknownEscape { byte: next },
                pos: pos + 1,
            })
        }
    };
    Ok((ch, 2))
}

// \u followed by exactly 4 hex digits, decoded as a single code unit. Surrogate
// pairs are NOT combined: a half of a pair cannot stand alone as a char and
// decodes to U+FFFD
fn decode_unicode(buffer: &[u8], pos: usize) -> Result<(char, usize), EscapeError> {
    if pos + 6 > buffer.len() {
        return Err(EscapeError { kind: EscapeErrorKind::UnexpectedEof, pos });
    }

    let code_unit = number::hex_to_u16(&buffer[pos + 2..pos + 6]).map_err(|err| EscapeError {
        kind: EscapeErrorKind::InvalidHexDigit { digit: err.digit },
        pos: pos + 2 + err.pos,
    })?;

    let ch = char::from_u32(code_unit as u32).unwrap_or('\u{FFFD}');
    Ok((ch, 6))
}
