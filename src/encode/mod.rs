//! MessagePack encoder.
//!
//! [`Encoder`] writes self-describing values to any [`std::io::Write`],
//! always picking the narrowest wire form that holds the value. The
//! string-interning entry points live in [`intern`] as a layer on top of
//! the plain literal forms here.

mod intern;

use std::io::Write;

use crate::codes;
use crate::config::WireConfig;
use crate::dict::EncodeDict;
use crate::error::{PackError, Result};
use crate::value::Value;

/// Streaming MessagePack encoder with a per-instance interning dictionary.
///
/// The dictionary lives exactly as long as the encoder: it is never cleared
/// between top-level encode calls, and there is no reset. Pair every
/// encoder with a decoder built from an equivalent [`WireConfig`].
#[derive(Debug)]
pub struct Encoder<W> {
    writer: W,
    config: WireConfig,
    dict: EncodeDict,
}

impl<W: Write> Encoder<W> {
    /// Encoder with the default configuration (interning registered).
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, WireConfig::new())
    }

    /// Encoder with an explicit configuration.
    pub fn with_config(writer: W, config: WireConfig) -> Self {
        Self {
            writer,
            config,
            dict: EncodeDict::new(),
        }
    }

    /// Consume the encoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Number of strings interned so far.
    pub fn dict_len(&self) -> usize {
        self.dict.len()
    }

    /// This encoder's configuration.
    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    pub(crate) fn dict_mut(&mut self) -> &mut EncodeDict {
        &mut self.dict
    }

    pub(crate) fn dict(&self) -> &EncodeDict {
        &self.dict
    }

    /// Write a single code byte.
    pub(crate) fn write_code(&mut self, code: u8) -> Result<()> {
        self.writer.write_all(&[code])?;
        Ok(())
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Encode the nil marker.
    pub fn encode_nil(&mut self) -> Result<()> {
        self.write_code(codes::NIL)
    }

    /// Encode a boolean.
    pub fn encode_bool(&mut self, b: bool) -> Result<()> {
        self.write_code(if b { codes::TRUE } else { codes::FALSE })
    }

    /// Encode a signed integer in its narrowest form.
    pub fn encode_int(&mut self, n: i64) -> Result<()> {
        if n >= 0 {
            return self.encode_uint(n as u64);
        }
        if n >= -32 {
            self.write_code(n as u8)
        } else if n >= i64::from(i8::MIN) {
            self.write_code(codes::INT8)?;
            self.write_bytes(&(n as i8).to_be_bytes())
        } else if n >= i64::from(i16::MIN) {
            self.write_code(codes::INT16)?;
            self.write_bytes(&(n as i16).to_be_bytes())
        } else if n >= i64::from(i32::MIN) {
            self.write_code(codes::INT32)?;
            self.write_bytes(&(n as i32).to_be_bytes())
        } else {
            self.write_code(codes::INT64)?;
            self.write_bytes(&n.to_be_bytes())
        }
    }

    /// Encode an unsigned integer in its narrowest form.
    pub fn encode_uint(&mut self, n: u64) -> Result<()> {
        if n <= 0x7f {
            self.write_code(n as u8)
        } else if n <= u64::from(u8::MAX) {
            self.write_code(codes::UINT8)?;
            self.write_bytes(&(n as u8).to_be_bytes())
        } else if n <= u64::from(u16::MAX) {
            self.write_code(codes::UINT16)?;
            self.write_bytes(&(n as u16).to_be_bytes())
        } else if n <= u64::from(u32::MAX) {
            self.write_code(codes::UINT32)?;
            self.write_bytes(&(n as u32).to_be_bytes())
        } else {
            self.write_code(codes::UINT64)?;
            self.write_bytes(&n.to_be_bytes())
        }
    }

    /// Encode a 64-bit float.
    pub fn encode_float(&mut self, f: f64) -> Result<()> {
        self.write_code(codes::FLOAT64)?;
        self.write_bytes(&f.to_be_bytes())
    }

    /// Encode a plain string literal. The dictionary is not consulted; use
    /// [`Encoder::encode_interned_str`] for the interning path.
    pub fn encode_str(&mut self, s: &str) -> Result<()> {
        let len = s.len();
        if len < 32 {
            self.write_code(codes::FIXSTR_BASE | len as u8)?;
        } else if len <= usize::from(u8::MAX) {
            self.write_code(codes::STR8)?;
            self.write_bytes(&[len as u8])?;
        } else if len <= usize::from(u16::MAX) {
            self.write_code(codes::STR16)?;
            self.write_bytes(&(len as u16).to_be_bytes())?;
        } else if u64::try_from(len).is_ok_and(|l| l <= u64::from(u32::MAX)) {
            self.write_code(codes::STR32)?;
            self.write_bytes(&(len as u32).to_be_bytes())?;
        } else {
            return Err(PackError::ValueTooLarge(len));
        }
        self.write_bytes(s.as_bytes())
    }

    /// Encode a binary blob.
    pub fn encode_bin(&mut self, data: &[u8]) -> Result<()> {
        let len = data.len();
        if len <= usize::from(u8::MAX) {
            self.write_code(codes::BIN8)?;
            self.write_bytes(&[len as u8])?;
        } else if len <= usize::from(u16::MAX) {
            self.write_code(codes::BIN16)?;
            self.write_bytes(&(len as u16).to_be_bytes())?;
        } else if u64::try_from(len).is_ok_and(|l| l <= u64::from(u32::MAX)) {
            self.write_code(codes::BIN32)?;
            self.write_bytes(&(len as u32).to_be_bytes())?;
        } else {
            return Err(PackError::ValueTooLarge(len));
        }
        self.write_bytes(data)
    }

    /// Encode an array header; the caller then encodes `len` elements.
    pub fn encode_array_len(&mut self, len: usize) -> Result<()> {
        if len < 16 {
            self.write_code(codes::FIXARRAY_BASE | len as u8)
        } else if len <= usize::from(u16::MAX) {
            self.write_code(codes::ARRAY16)?;
            self.write_bytes(&(len as u16).to_be_bytes())
        } else if u64::try_from(len).is_ok_and(|l| l <= u64::from(u32::MAX)) {
            self.write_code(codes::ARRAY32)?;
            self.write_bytes(&(len as u32).to_be_bytes())
        } else {
            Err(PackError::ValueTooLarge(len))
        }
    }

    /// Encode a map header; the caller then encodes `len` key/value pairs.
    pub fn encode_map_len(&mut self, len: usize) -> Result<()> {
        if len < 16 {
            self.write_code(codes::FIXMAP_BASE | len as u8)
        } else if len <= usize::from(u16::MAX) {
            self.write_code(codes::MAP16)?;
            self.write_bytes(&(len as u16).to_be_bytes())
        } else if u64::try_from(len).is_ok_and(|l| l <= u64::from(u32::MAX)) {
            self.write_code(codes::MAP32)?;
            self.write_bytes(&(len as u32).to_be_bytes())
        } else {
            Err(PackError::ValueTooLarge(len))
        }
    }

    /// Encode an application extension envelope.
    pub fn encode_ext(&mut self, id: i8, payload: &[u8]) -> Result<()> {
        match payload.len() {
            1 => self.write_code(codes::FIXEXT1)?,
            2 => self.write_code(codes::FIXEXT2)?,
            4 => self.write_code(codes::FIXEXT4)?,
            8 => self.write_code(codes::FIXEXT8)?,
            16 => self.write_code(codes::FIXEXT16)?,
            len if len <= usize::from(u8::MAX) => {
                self.write_code(codes::EXT8)?;
                self.write_bytes(&[len as u8])?;
            }
            len if len <= usize::from(u16::MAX) => {
                self.write_code(codes::EXT16)?;
                self.write_bytes(&(len as u16).to_be_bytes())?;
            }
            len if u64::try_from(len).is_ok_and(|l| l <= u64::from(u32::MAX)) => {
                self.write_code(codes::EXT32)?;
                self.write_bytes(&(len as u32).to_be_bytes())?;
            }
            len => return Err(PackError::ValueTooLarge(len)),
        }
        self.write_bytes(&(id as u8).to_be_bytes())?;
        self.write_bytes(payload)
    }

    /// Encode any [`Value`]. Strings go out as plain literals; interning is
    /// only applied through the dedicated entry points.
    pub fn encode_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Nil => self.encode_nil(),
            Value::Bool(b) => self.encode_bool(*b),
            Value::Int(n) => self.encode_int(*n),
            Value::UInt(n) => self.encode_uint(*n),
            Value::Float(f) => self.encode_float(*f),
            Value::Str(s) => self.encode_str(s),
            Value::Bin(data) => self.encode_bin(data),
            Value::Array(items) => {
                self.encode_array_len(items.len())?;
                for item in items {
                    self.encode_value(item)?;
                }
                Ok(())
            }
            Value::Map(entries) => {
                self.encode_map_len(entries.len())?;
                for (key, val) in entries {
                    self.encode_value(key)?;
                    self.encode_value(val)?;
                }
                Ok(())
            }
            Value::Ext(id, payload) => self.encode_ext(*id, payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn encode_one(value: &Value) -> Vec<u8> {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_value(value).unwrap();
        enc.into_inner()
    }

    #[test]
    fn test_encode_nil_and_bool() {
        assert_eq!(encode_one(&Value::Nil), hex!("c0"));
        assert_eq!(encode_one(&Value::Bool(true)), hex!("c3"));
        assert_eq!(encode_one(&Value::Bool(false)), hex!("c2"));
    }

    #[test]
    fn test_encode_int_narrowest_form() {
        assert_eq!(encode_one(&Value::Int(0)), hex!("00"));
        assert_eq!(encode_one(&Value::Int(127)), hex!("7f"));
        assert_eq!(encode_one(&Value::Int(128)), hex!("cc80"));
        assert_eq!(encode_one(&Value::Int(-1)), hex!("ff"));
        assert_eq!(encode_one(&Value::Int(-32)), hex!("e0"));
        assert_eq!(encode_one(&Value::Int(-33)), hex!("d0df"));
        assert_eq!(encode_one(&Value::Int(-129)), hex!("d1ff7f"));
        assert_eq!(encode_one(&Value::UInt(65535)), hex!("cdffff"));
        assert_eq!(encode_one(&Value::UInt(65536)), hex!("ce00010000"));
        assert_eq!(
            encode_one(&Value::UInt(u64::MAX)),
            hex!("cfffffffffffffffff")
        );
    }

    #[test]
    fn test_encode_str_forms() {
        assert_eq!(encode_one(&Value::from("")), hex!("a0"));
        assert_eq!(encode_one(&Value::from("abc")), hex!("a3616263"));

        let s31 = "x".repeat(31);
        assert_eq!(encode_one(&Value::from(s31.clone()))[0], 0xbf);

        let s32 = "x".repeat(32);
        let bytes = encode_one(&Value::from(s32));
        assert_eq!(&bytes[..2], hex!("d920"));

        let s256 = "x".repeat(256);
        let bytes = encode_one(&Value::from(s256));
        assert_eq!(&bytes[..3], hex!("da0100"));
    }

    #[test]
    fn test_encode_bin_and_ext() {
        assert_eq!(encode_one(&Value::Bin(vec![1, 2, 3])), hex!("c403010203"));
        // 4-byte payload uses fixext4, 3-byte payload falls back to ext8.
        assert_eq!(
            encode_one(&Value::Ext(5, vec![0xde, 0xad, 0xbe, 0xef])),
            hex!("d605deadbeef")
        );
        assert_eq!(
            encode_one(&Value::Ext(5, vec![0xde, 0xad, 0xbe])),
            hex!("c70305deadbe")
        );
    }

    #[test]
    fn test_encode_containers() {
        let arr = Value::Array(vec![Value::Int(1), Value::from("ab")]);
        assert_eq!(encode_one(&arr), hex!("9201a26162"));

        let map = Value::Map(vec![(Value::from("k"), Value::Int(7))]);
        assert_eq!(encode_one(&map), hex!("81a16b07"));
    }

    #[test]
    fn test_generic_encode_never_interns() {
        let mut enc = Encoder::new(Vec::new());
        enc.encode_value(&Value::from("repeated")).unwrap();
        enc.encode_value(&Value::from("repeated")).unwrap();
        assert_eq!(enc.dict_len(), 0);
    }
}
