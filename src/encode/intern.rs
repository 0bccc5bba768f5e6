//! Encode-side interning policy and reference encoding.
//!
//! The first occurrence of an eligible string always goes out as a full
//! literal (that is what lets the decoder capture it); every later
//! occurrence becomes a fixext reference carrying the dictionary index in
//! the narrowest of three widths:
//!
//! ```text
//! index <= 0xff        fixext1  [0xd4][0x80][idx:1]
//! index <= 0xffff      fixext2  [0xd5][0x80][idx:2 BE]
//! index <= 0xffffffff  fixext4  [0xd6][0x80][idx:4 BE]
//! ```
//!
//! `0x80` is the reserved type id ([`INTERNED_STRING_EXT_ID`] = -128) as it
//! appears on the wire.

use std::io::Write;

use crate::codes;
use crate::config::INTERNED_STRING_EXT_ID;
use crate::dict::eligible;
use crate::error::{PackError, Result};
use crate::value::Value;

use super::Encoder;

impl<W: Write> Encoder<W> {
    /// Encode a string field with interning enabled.
    ///
    /// Emits a literal for the first occurrence of each eligible string and
    /// a back-reference for every repeat. Strings shorter than
    /// [`MIN_INTERN_LEN`](crate::MIN_INTERN_LEN) are always literal.
    pub fn encode_interned_str(&mut self, s: &str) -> Result<()> {
        self.encode_interned(s, true)
    }

    /// Encode a field that may or may not hold a string.
    ///
    /// `None` becomes the nil marker, strings take the interning path, and
    /// anything else is handed to the generic value encoder.
    pub fn encode_interned_value(&mut self, value: Option<&Value>) -> Result<()> {
        match value {
            None | Some(Value::Nil) => self.encode_nil(),
            Some(Value::Str(s)) => self.encode_interned(s, true),
            Some(other) => self.encode_value(other),
        }
    }

    fn encode_interned(&mut self, s: &str, intern: bool) -> Result<()> {
        if eligible(s.len()) {
            if let Some(idx) = self.dict().get(s) {
                return self.encode_index(u64::from(idx));
            }
            if intern {
                // A full dictionary drops the insert; the string stays a
                // literal for this and every later occurrence.
                self.dict_mut().intern(s);
            }
        }
        self.encode_str(s)
    }

    /// Encode a dictionary index as a reserved-type fixext envelope.
    pub(crate) fn encode_index(&mut self, idx: u64) -> Result<()> {
        if idx <= u64::from(u8::MAX) {
            self.write_code(codes::FIXEXT1)?;
            self.write_bytes(&[INTERNED_STRING_EXT_ID as u8, idx as u8])
        } else if idx <= u64::from(u16::MAX) {
            self.write_code(codes::FIXEXT2)?;
            self.write_bytes(&[INTERNED_STRING_EXT_ID as u8])?;
            self.write_bytes(&(idx as u16).to_be_bytes())
        } else if idx <= u64::from(u32::MAX) {
            self.write_code(codes::FIXEXT4)?;
            self.write_bytes(&[INTERNED_STRING_EXT_ID as u8])?;
            self.write_bytes(&(idx as u32).to_be_bytes())
        } else {
            Err(PackError::IndexOverflow(idx))
        }
    }
}
