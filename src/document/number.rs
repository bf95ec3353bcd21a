use std::fmt;

/// A numeric magnitude tagged as integral or fractional.
///
/// The tag is decided at parse time from the lexical form of the literal, not
/// from the mathematical value: `2` is integral while `2.0` and `2e0` are
/// fractional even though all three equal two. The tag survives a
/// serialize/parse round trip.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Number(NumberKind);

#[derive(Debug, PartialEq, Clone, Copy)]
enum NumberKind {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_integral(&self) -> bool {
        matches!(self.0, NumberKind::Int(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.0 {
            NumberKind::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.0 {
            NumberKind::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Magnitude as an integer regardless of the tag; fractional values
    /// truncate toward zero.
    pub fn to_i64(&self) -> i64 {
        match self.0 {
            NumberKind::Int(v) => v,
            NumberKind::Float(v) => v as i64,
        }
    }

    /// Magnitude as a float regardless of the tag.
    pub fn to_f64(&self) -> f64 {
        match self.0 {
            NumberKind::Int(v) => v as f64,
            NumberKind::Float(v) => v,
        }
    }
}

impl From<i64> for Number {
    fn from(val: i64) -> Self {
        Number(NumberKind::Int(val))
    }
}

impl From<f64> for Number {
    fn from(val: f64) -> Self {
        Number(NumberKind::Float(val))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            NumberKind::Int(v) => write!(f, "{}", v),
            // {:?} keeps a '.' or exponent in the output ("42.0", "1e100"), so
            // re-parsing the text yields a fractional tag again
            NumberKind::Float(v) => write!(f, "{:?}", v),
        }
    }
}

#[derive(Debug, PartialEq)]
pub(super) struct HexError {
    pub(super) digit: u8,
    pub(super) pos: usize,
}

// We return u16 because the valid range for a \u sequence is 0x0000-0xFFFF
pub(super) fn hex_to_u16(buffer: &[u8]) -> Result<u16, HexError> {
    let mut val: u16 = 0;

    for (index, &byte) in buffer.iter().enumerate() {
        let hex_val = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return Err(HexError { digit: byte, pos: index }),
        };
        val = val * 16 + hex_val as u16;
    }
    Ok(val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_follows_construction() {
        assert!(Number::from(2i64).is_integral());
        assert!(!Number::from(2.0).is_integral());
    }

    #[test]
    fn strict_accessors_are_tag_exact() {
        let int = Number::from(42i64);
        let float = Number::from(42.0);

        assert_eq!(int.as_i64(), Some(42));
        assert_eq!(int.as_f64(), None);
        assert_eq!(float.as_f64(), Some(42.0));
        assert_eq!(float.as_i64(), None);
    }

    #[test]
    fn coercing_accessors_cross_tags() {
        assert_eq!(Number::from(3.9).to_i64(), 3);
        assert_eq!(Number::from(-3.9).to_i64(), -3);
        assert_eq!(Number::from(42i64).to_f64(), 42.0);
    }

    #[test]
    fn fractional_display_keeps_the_tag() {
        assert_eq!(Number::from(42i64).to_string(), "42");
        assert_eq!(Number::from(42.0).to_string(), "42.0");
        assert_eq!(Number::from(1e100).to_string(), "1e100");
    }

    #[test]
    fn convert_to_u16() {
        // "12aB"
        assert_eq!(hex_to_u16(&[0x31, 0x32, 0x61, 0x42]).unwrap(), 0x12ab);
    }

    #[test]
    fn invalid_hex_digit() {
        // "12gB"
        let result = hex_to_u16(&[0x31, 0x32, 0x67, 0x42]);
        assert_eq!(result, Err(HexError { digit: 0x67, pos: 2 }));
    }
}
