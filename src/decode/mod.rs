//! MessagePack decoder.
//!
//! [`Decoder`] reads self-describing values from any [`std::io::Read`]
//! through a [`ByteSource`], which provides the one byte of pushback the
//! interface-typed interning path needs. The interning entry points live in
//! [`intern`].

mod intern;

use std::io::Read;

use crate::codes;
use crate::config::{WireConfig, INTERNED_STRING_EXT_ID};
use crate::dict::DecodeDict;
use crate::error::{PackError, Result};
use crate::source::ByteSource;
use crate::value::Value;

/// Streaming MessagePack decoder with a per-instance interning dictionary.
///
/// The dictionary mirrors the paired encoder's index assignment and lives as
/// long as the decoder. After any decode error the dictionary may be out of
/// step with the stream; discard the decoder instead of reusing it.
#[derive(Debug)]
pub struct Decoder<R> {
    source: ByteSource<R>,
    config: WireConfig,
    dict: DecodeDict,
}

impl<R: Read> Decoder<R> {
    /// Decoder with the default configuration (interning registered).
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, WireConfig::new())
    }

    /// Decoder with an explicit configuration.
    pub fn with_config(reader: R, config: WireConfig) -> Self {
        Self {
            source: ByteSource::new(reader),
            config,
            dict: DecodeDict::new(),
        }
    }

    /// Number of strings interned so far.
    pub fn dict_len(&self) -> usize {
        self.dict.len()
    }

    /// This decoder's configuration.
    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    pub(crate) fn source_mut(&mut self) -> &mut ByteSource<R> {
        &mut self.source
    }

    pub(crate) fn dict(&self) -> &DecodeDict {
        &self.dict
    }

    pub(crate) fn dict_mut(&mut self) -> &mut DecodeDict {
        &mut self.dict
    }

    /// Decode any value, recursing through containers.
    pub fn decode_value(&mut self) -> Result<Value> {
        let code = self.source.read_byte()?;
        self.decode_value_with_code(code)
    }

    fn decode_value_with_code(&mut self, code: u8) -> Result<Value> {
        if codes::is_positive_fixint(code) {
            return Ok(Value::Int(i64::from(code)));
        }
        if codes::is_negative_fixint(code) {
            return Ok(Value::Int(i64::from(code as i8)));
        }
        if codes::is_fixstr(code) {
            let len = usize::from(code & codes::FIXSTR_MASK);
            return Ok(Value::Str(self.read_str(len)?));
        }
        if codes::is_fixarray(code) {
            let len = usize::from(code & codes::FIXCONTAINER_MASK);
            return self.read_array(len);
        }
        if codes::is_fixmap(code) {
            let len = usize::from(code & codes::FIXCONTAINER_MASK);
            return self.read_map(len);
        }

        match code {
            codes::NIL => Ok(Value::Nil),
            codes::TRUE => Ok(Value::Bool(true)),
            codes::FALSE => Ok(Value::Bool(false)),

            codes::UINT8 => Ok(Value::Int(i64::from(self.source.read_byte()?))),
            codes::UINT16 => Ok(Value::Int(i64::from(self.source.read_u16()?))),
            codes::UINT32 => Ok(Value::Int(i64::from(self.source.read_u32()?))),
            codes::UINT64 => {
                let n = self.source.read_u64()?;
                match i64::try_from(n) {
                    Ok(signed) => Ok(Value::Int(signed)),
                    Err(_) => Ok(Value::UInt(n)),
                }
            }

            codes::INT8 => Ok(Value::Int(i64::from(self.source.read_byte()? as i8))),
            codes::INT16 => Ok(Value::Int(i64::from(self.source.read_u16()? as i16))),
            codes::INT32 => Ok(Value::Int(i64::from(self.source.read_u32()? as i32))),
            codes::INT64 => Ok(Value::Int(self.source.read_u64()? as i64)),

            codes::FLOAT32 => {
                let mut buf = [0u8; 4];
                self.source.read_exact(&mut buf)?;
                Ok(Value::Float(f64::from(f32::from_be_bytes(buf))))
            }
            codes::FLOAT64 => {
                let mut buf = [0u8; 8];
                self.source.read_exact(&mut buf)?;
                Ok(Value::Float(f64::from_be_bytes(buf)))
            }

            codes::STR8 => {
                let len = usize::from(self.source.read_byte()?);
                Ok(Value::Str(self.read_str(len)?))
            }
            codes::STR16 => {
                let len = usize::from(self.source.read_u16()?);
                Ok(Value::Str(self.read_str(len)?))
            }
            codes::STR32 => {
                let len = self.source.read_u32()? as usize;
                Ok(Value::Str(self.read_str(len)?))
            }

            codes::BIN8 => {
                let len = usize::from(self.source.read_byte()?);
                Ok(Value::Bin(self.source.read_n(len)?))
            }
            codes::BIN16 => {
                let len = usize::from(self.source.read_u16()?);
                Ok(Value::Bin(self.source.read_n(len)?))
            }
            codes::BIN32 => {
                let len = self.source.read_u32()? as usize;
                Ok(Value::Bin(self.source.read_n(len)?))
            }

            codes::ARRAY16 => {
                let len = usize::from(self.source.read_u16()?);
                self.read_array(len)
            }
            codes::ARRAY32 => {
                let len = self.source.read_u32()? as usize;
                self.read_array(len)
            }

            codes::MAP16 => {
                let len = usize::from(self.source.read_u16()?);
                self.read_map(len)
            }
            codes::MAP32 => {
                let len = self.source.read_u32()? as usize;
                self.read_map(len)
            }

            codes::FIXEXT1 => self.read_ext(1),
            codes::FIXEXT2 => self.read_ext(2),
            codes::FIXEXT4 => self.read_ext(4),
            codes::FIXEXT8 => self.read_ext(8),
            codes::FIXEXT16 => self.read_ext(16),
            codes::EXT8 => {
                let len = usize::from(self.source.read_byte()?);
                self.read_ext(len)
            }
            codes::EXT16 => {
                let len = usize::from(self.source.read_u16()?);
                self.read_ext(len)
            }
            codes::EXT32 => {
                let len = self.source.read_u32()? as usize;
                self.read_ext(len)
            }

            other => Err(PackError::UnexpectedCode(other)),
        }
    }

    /// Read the extension type id after its envelope header.
    pub(crate) fn read_ext_id(&mut self) -> Result<i8> {
        Ok(self.source.read_byte()? as i8)
    }

    fn read_ext(&mut self, len: usize) -> Result<Value> {
        let id = self.read_ext_id()?;
        if id == INTERNED_STRING_EXT_ID && self.config.interning_registered() {
            // Registered interned-string decoder: the payload is a
            // dictionary index, not application data.
            let idx = self.decode_index(len)?;
            return Ok(Value::Str(self.dict.get(idx)?.to_string()));
        }
        Ok(Value::Ext(id, self.source.read_n(len)?))
    }

    fn read_array(&mut self, len: usize) -> Result<Value> {
        let mut items = Vec::with_capacity(len.min(1024));
        for _ in 0..len {
            items.push(self.decode_value()?);
        }
        Ok(Value::Array(items))
    }

    fn read_map(&mut self, len: usize) -> Result<Value> {
        let mut entries = Vec::with_capacity(len.min(1024));
        for _ in 0..len {
            let key = self.decode_value()?;
            let val = self.decode_value()?;
            entries.push((key, val));
        }
        Ok(Value::Map(entries))
    }

    /// Read a UTF-8 string body of known length.
    pub(crate) fn read_str(&mut self, len: usize) -> Result<String> {
        Ok(String::from_utf8(self.source.read_n(len)?)?)
    }
}
