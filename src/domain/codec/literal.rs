//! Escaped byte literals
//!
//! Every byte is rendered as `\xHH` with lowercase hex digits. No byte is
//! special-cased, so the output is always four times the input length and
//! can be placed inside a Rust byte string literal as-is.

use std::io::{self, Write};

use crate::error::{GenesisError, GenesisResult};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Width of one escaped byte
pub const ESCAPE_WIDTH: usize = 4;

/// Escape a single byte
pub fn escape_byte(b: u8) -> [u8; ESCAPE_WIDTH] {
    [b'\\', b'x', HEX[usize::from(b >> 4)], HEX[usize::from(b & 0x0f)]]
}

/// Escape `data` into a literal body
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * ESCAPE_WIDTH);
    for &b in data {
        for c in escape_byte(b) {
            out.push(char::from(c));
        }
    }
    out
}

/// Reverse [`encode`]
///
/// Fails on anything that is not a run of well-formed `\xHH` groups,
/// including uppercase hex digits.
pub fn decode(literal: &str) -> GenesisResult<Vec<u8>> {
    let bytes = literal.as_bytes();
    if bytes.len() % ESCAPE_WIDTH != 0 {
        return Err(GenesisError::InvalidLiteral {
            offset: bytes.len() - bytes.len() % ESCAPE_WIDTH,
        });
    }

    bytes
        .chunks_exact(ESCAPE_WIDTH)
        .enumerate()
        .map(|(i, group)| {
            let offset = i * ESCAPE_WIDTH;
            match group {
                [b'\\', b'x', hi, lo] => match (nibble(*hi), nibble(*lo)) {
                    (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                    _ => Err(GenesisError::InvalidLiteral { offset }),
                },
                _ => Err(GenesisError::InvalidLiteral { offset }),
            }
        })
        .collect()
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Writer adapter that escapes everything written through it
pub struct HexWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> HexWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for HexWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.clear();
        self.buf.reserve(data.len() * ESCAPE_WIDTH);
        for &b in data {
            self.buf.extend_from_slice(&escape_byte(b));
        }
        self.inner.write_all(&self.buf)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
