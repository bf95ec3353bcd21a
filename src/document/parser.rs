use indexmap::IndexMap;

use crate::document::error::{ParseError, ParseErrorKind};
use crate::document::number::Number;
use crate::document::value::Value;
use crate::document::{escapes, skip_whitespace, NESTING_DEPTH_LIMIT};

// Recursive descent over the byte buffer, one lookahead byte at `pos`. Each
// grammar rule is one method; none of them skips whitespace on behalf of its
// caller except where the grammar says so.
pub(super) struct Parser<'a> {
    buffer: &'a [u8],
    pos: usize,
    depth: u16,
}

impl<'a> Parser<'a> {
    pub(super) fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, pos: 0, depth: 0 }
    }

    pub(super) fn parse(&mut self) -> Result<Value, ParseError> {
        skip_whitespace(self.buffer, &mut self.pos);
        let root = self.parse_value()?;
        skip_whitespace(self.buffer, &mut self.pos);
        // after the root value only whitespace may follow
        if self.pos < self.buffer.len() {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken { expected: "end of input" },
                self.pos,
            ));
        }
        Ok(root)
    }

    // value := object | array | string | number | "true" | "false" | "null"
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let Some(&byte) = self.buffer.get(self.pos) else {
            return Err(self.eof());
        };

        match byte {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => Ok(Value::String(self.parse_string()?)),
            // json prohibits a leading '+' but the grammar here tolerates one,
            // see parse_number()
            b'-' | b'+' | b'0'..=b'9' => Ok(Value::Number(self.parse_number()?)),
            b if b.is_ascii_alphabetic() => self.parse_keyword(),
            _ => Err(ParseError::new(ParseErrorKind::UnexpectedCharacter { byte }, self.pos)),
        }
    }

    // object := '{' ws (member (',' ws member)*)? ws '}'
    //
    // A stray comma is skipped and the member loop continues, so leading and
    // repeated separators are accepted and separators between members are
    // effectively optional. Documented leniency inherited from the reference
    // grammar; kept, not fixed.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.pos += 1; // consume '{'
        let mut map = IndexMap::new();

        loop {
            skip_whitespace(self.buffer, &mut self.pos);
            match self.buffer.get(self.pos) {
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                Some(b',') => {
                    self.pos += 1;
                    continue;
                }
                Some(_) => (),
                None => return Err(self.eof()),
            }

            let key = self.parse_string()?;
            skip_whitespace(self.buffer, &mut self.pos);
            self.expect(b':', "colon ':'")?;
            skip_whitespace(self.buffer, &mut self.pos);
            let value = self.parse_value()?;
            // duplicate names: the last occurrence wins and the earlier
            // subtree is dropped, matching the container set() contract
            map.insert(key, value);
        }
        self.depth -= 1;
        Ok(Value::Object(map))
    }

    // array := '[' ws (value (',' ws value)*)? ws ']'
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.pos += 1; // consume '['
        let mut values = Vec::new();

        loop {
            skip_whitespace(self.buffer, &mut self.pos);
            match self.buffer.get(self.pos) {
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                Some(b',') => {
                    self.pos += 1;
                    continue;
                }
                Some(_) => values.push(self.parse_value()?),
                None => return Err(self.eof()),
            }
        }
        self.depth -= 1;
        Ok(Value::Array(values))
    }

    // string := '"' (char | escape)* '"'
    //
    // Scans to the unescaped closing quote; whitespace inside the literal is
    // content, never skipped. Escapes are decoded here, so the returned String
    // holds the final text.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        match self.buffer.get(self.pos) {
            Some(b'"') => self.pos += 1,
            Some(_) => {
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken { expected: "object name" },
                    self.pos,
                ))
            }
            None => return Err(self.eof()),
        }

        let start = self.pos; // first content byte; opening quote is at start - 1
        let mut val = String::new();
        loop {
            // jump to the next byte that can end or alter the literal run
            let Some(found) = memchr::memchr2(b'"', b'\\', &self.buffer[self.pos..]) else {
                return Err(ParseError::new(ParseErrorKind::UnterminatedString, start - 1));
            };

            let run = std::str::from_utf8(&self.buffer[self.pos..self.pos + found]).map_err(
                |err| ParseError::new(ParseErrorKind::InvalidUtf8, self.pos + err.valid_up_to()),
            )?;
            val.push_str(run);
            self.pos += found;

            if self.buffer[self.pos] == b'"' {
                self.pos += 1;
                break;
            }
            let (ch, len) = escapes::decode_escape(self.buffer, self.pos)?;
            val.push(ch);
            self.pos += len;
        }
        Ok(val)
    }

    // number := ['+'|'-'] digit+ ['.' digit+] [('e'|'E') ['+'|'-'] digit+]
    //
    // The fractional tag comes from the lexical form alone: a '.' or an
    // exponent marker makes the literal fractional no matter what it equals.
    // The leading '+' is the reference grammar's documented permissiveness.
    fn parse_number(&mut self) -> Result<Number, ParseError> {
        let start = self.pos;
        if matches!(self.buffer[self.pos], b'+' | b'-') {
            self.pos += 1;
        }
        self.digits();

        let mut fractional = false;
        if self.buffer.get(self.pos) == Some(&b'.') {
            fractional = true;
            self.pos += 1;
            self.digits();
        }
        if matches!(self.buffer.get(self.pos), Some(b'e' | b'E')) {
            fractional = true;
            self.pos += 1;
            if matches!(self.buffer.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.digits();
        }

        // the scanned range is ascii by construction
        let literal = std::str::from_utf8(&self.buffer[start..self.pos]).unwrap();
        let number = if fractional {
            literal.parse::<f64>().map(Number::from).map_err(|_| ())
        } else {
            literal.parse::<i64>().map(Number::from).map_err(|_| ())
        };
        number.map_err(|_| ParseError::new(ParseErrorKind::MalformedNumber, start))
    }

    fn digits(&mut self) {
        while matches!(self.buffer.get(self.pos), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    // Reads the full run of ascii letters and matches it against the closed
    // literal set in one place; anything else is rejected uniformly.
    fn parse_keyword(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while matches!(self.buffer.get(self.pos), Some(b) if b.is_ascii_alphabetic()) {
            self.pos += 1;
        }

        match &self.buffer[start..self.pos] {
            b"true" => Ok(Value::Boolean(true)),
            b"false" => Ok(Value::Boolean(false)),
            b"null" => Ok(Value::Null),
            _ => Err(ParseError::new(ParseErrorKind::InvalidKeyword, start)),
        }
    }

    fn expect(&mut self, expected: u8, name: &'static str) -> Result<(), ParseError> {
        match self.buffer.get(self.pos) {
            Some(&byte) if byte == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => {
                Err(ParseError::new(ParseErrorKind::UnexpectedToken { expected: name }, self.pos))
            }
            None => Err(self.eof()),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth == NESTING_DEPTH_LIMIT {
            return Err(ParseError::new(
                ParseErrorKind::NestingDepthExceeded { depth: NESTING_DEPTH_LIMIT },
                self.pos,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn eof(&self) -> ParseError {
        ParseError::new(ParseErrorKind::UnexpectedEof, self.buffer.len().saturating_sub(1))
    }
}
