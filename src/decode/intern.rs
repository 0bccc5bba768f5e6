//! Decode-side interning policy and reference decoding.
//!
//! One decode call walks a small terminal state machine keyed on the
//! leading code byte:
//!
//! ```text
//! nil                      -> empty string, no dictionary effect
//! fixstr / str / bin       -> read literal, intern if eligible, return it
//! fixext1/2/4 reserved id  -> read index (1/2/4 bytes BE), dictionary lookup
//! fixext1/2/4 other id     -> ExtensionTypeMismatch
//! anything else            -> UnexpectedCode
//! ```
//!
//! `UnexpectedCode` is terminal for the string-only entry point but a
//! routing signal for the interface-typed one, which pushes the code byte
//! back and delegates to the generic value decoder. No state survives a
//! call beyond the dictionary itself.

use std::io::Read;

use crate::codes;
use crate::config::INTERNED_STRING_EXT_ID;
use crate::dict::eligible;
use crate::error::{PackError, Result};
use crate::value::Value;

use super::Decoder;

impl<R: Read> Decoder<R> {
    /// Decode a string field written by
    /// [`Encoder::encode_interned_str`](crate::Encoder::encode_interned_str).
    ///
    /// Any wire code other than nil, a literal, or a reserved reference is
    /// a hard error here.
    pub fn decode_interned_str(&mut self) -> Result<String> {
        let code = self.source_mut().read_byte()?;
        match self.decode_interned_string(code, true) {
            Err(PackError::UnexpectedCode(c)) => Err(PackError::InvalidStringCode(c)),
            other => other,
        }
    }

    /// Decode a field that may or may not hold a string.
    ///
    /// Strings (literal or referenced) come back as [`Value::Str`]; nil
    /// maps to an empty string with no dictionary effect. For any
    /// non-string code the byte is pushed back and the generic decoder
    /// takes over, leaving the stream position exactly where it would have
    /// been without the interning probe.
    pub fn decode_interned_value(&mut self) -> Result<Value> {
        let code = self.source_mut().read_byte()?;
        match self.decode_interned_string(code, true) {
            Ok(s) => Ok(Value::Str(s)),
            Err(PackError::UnexpectedCode(_)) => {
                tracing::trace!(code, "non-string code, delegating to generic decoder");
                self.source_mut().unread_byte()?;
                self.decode_value()
            }
            Err(err) => Err(err),
        }
    }

    /// Core decode policy, given the already-read leading code byte.
    pub(crate) fn decode_interned_string(&mut self, code: u8, intern: bool) -> Result<String> {
        if codes::is_fixstr(code) {
            let len = usize::from(code & codes::FIXSTR_MASK);
            return self.decode_literal_with_len(len, intern);
        }

        match code {
            codes::NIL => Ok(String::new()),
            codes::FIXEXT1 | codes::FIXEXT2 | codes::FIXEXT4 => {
                let id = self.read_ext_id()?;
                if id != INTERNED_STRING_EXT_ID {
                    return Err(PackError::ExtensionTypeMismatch {
                        got: id,
                        want: INTERNED_STRING_EXT_ID,
                    });
                }
                let len = match code {
                    codes::FIXEXT1 => 1,
                    codes::FIXEXT2 => 2,
                    _ => 4,
                };
                let idx = self.decode_index(len)?;
                // Referenced entries are never reinserted.
                Ok(self.dict().get(idx)?.to_string())
            }
            codes::STR8 | codes::BIN8 => {
                let len = usize::from(self.source_mut().read_byte()?);
                self.decode_literal_with_len(len, intern)
            }
            codes::STR16 | codes::BIN16 => {
                let len = usize::from(self.source_mut().read_u16()?);
                self.decode_literal_with_len(len, intern)
            }
            codes::STR32 | codes::BIN32 => {
                let len = self.source_mut().read_u32()? as usize;
                self.decode_literal_with_len(len, intern)
            }
            other => Err(PackError::UnexpectedCode(other)),
        }
    }

    /// Decode a reference payload of `len` bytes into a dictionary index.
    pub(crate) fn decode_index(&mut self, len: usize) -> Result<u32> {
        match len {
            1 => Ok(u32::from(self.source_mut().read_byte()?)),
            2 => Ok(u32::from(self.source_mut().read_u16()?)),
            4 => self.source_mut().read_u32(),
            other => Err(PackError::MalformedIndexWidth(other)),
        }
    }

    /// Read a literal body and intern it when policy allows. The Nth
    /// eligible literal lands at position N, matching the encoder's
    /// assignment order exactly.
    fn decode_literal_with_len(&mut self, len: usize, intern: bool) -> Result<String> {
        if len == 0 {
            return Ok(String::new());
        }
        let s = self.read_str(len)?;
        if intern && eligible(s.len()) {
            self.dict_mut().intern(&s);
        }
        Ok(s)
    }
}
