//! # internpack - MessagePack with per-stream string interning
//!
//! MessagePack encoder/decoder pair where a string value that recurs within
//! one stream is written once as a full literal and afterwards as a short
//! back-reference into a dictionary both sides grow in lockstep. No bytes
//! are exchanged about the dictionary itself; index assignment follows
//! purely from the order in which literals cross the wire.
//!
//! ## Wire Convention
//!
//! References ride inside MessagePack's fixed extension envelopes under the
//! reserved type id `-128` (`0x80` on the wire), chosen to sit outside the
//! range applications typically claim:
//!
//! | Index range        | Envelope | Bytes                    |
//! |--------------------|----------|--------------------------|
//! | `0..=0xff`         | fixext1  | `d4 80 <idx:1>`          |
//! | `0..=0xffff`       | fixext2  | `d5 80 <idx:2 BE>`       |
//! | `0..=0xffffffff`   | fixext4  | `d6 80 <idx:4 BE>`       |
//!
//! Literals stay plain MessagePack strings (fixstr, str 8/16/32) and bin
//! envelopes intern identically. Nil maps to an empty string with no
//! dictionary effect.
//!
//! ## Interning Rules
//!
//! - Strings shorter than 3 bytes are always literal (a reference costs at
//!   least 3 bytes).
//! - The first occurrence of an eligible string is always a literal; that
//!   is how the decoder captures it.
//! - The dictionary caps at 65 535 entries; beyond that, new strings stay
//!   literal for the life of the instance.
//! - Dictionaries live exactly as long as their encoder/decoder and are
//!   never shared between streams.
//!
//! ## Quick Start
//!
//! ```rust
//! use internpack::{Decoder, Encoder};
//! use std::io::Cursor;
//!
//! let mut enc = Encoder::new(Vec::new());
//! for s in ["abcdef", "xy", "abcdef", "abcdef"] {
//!     enc.encode_interned_str(s).unwrap();
//! }
//! let wire = enc.into_inner();
//!
//! let mut dec = Decoder::new(Cursor::new(wire));
//! for expected in ["abcdef", "xy", "abcdef", "abcdef"] {
//!     assert_eq!(dec.decode_interned_str().unwrap(), expected);
//! }
//! ```
//!
//! ## Entry Points
//!
//! Two statically distinct pairs, selected at the call site:
//!
//! - **String-only fields**: [`Encoder::encode_interned_str`] /
//!   [`Decoder::decode_interned_str`]. Non-string wire codes are a hard
//!   error on decode.
//! - **Possibly-string fields**: [`Encoder::encode_interned_value`] /
//!   [`Decoder::decode_interned_value`]. When the wire holds something
//!   other than a string, the decoder rewinds its one-byte probe and the
//!   generic value decoder takes over.
//!
//! Encoder and decoder must be built from equivalent [`WireConfig`]s; the
//! config carries the extension-type registrations, including the reserved
//! interned-string decoder.

pub mod codes;
mod config;
mod decode;
mod dict;
mod encode;
mod error;
mod source;
mod value;

pub use config::{WireConfig, INTERNED_STRING_EXT_ID};
pub use decode::Decoder;
pub use dict::{MAX_DICT_ENTRIES, MIN_INTERN_LEN};
pub use encode::Encoder;
pub use error::{PackError, Result};
pub use source::ByteSource;
pub use value::Value;
