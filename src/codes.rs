//! MessagePack code bytes.
//!
//! Every MessagePack value starts with a one-byte code that either encodes
//! the value inline (fixint, fixstr, fixarray, fixmap) or names a
//! length-prefixed envelope. The constants and predicates here are shared by
//! the encode and decode paths.
//!
//! ```text
//! 0x00-0x7f  positive fixint       0xc0  nil
//! 0x80-0x8f  fixmap                0xc2  false       0xc3  true
//! 0x90-0x9f  fixarray              0xc4-0xc6  bin 8/16/32
//! 0xa0-0xbf  fixstr                0xc7-0xc9  ext 8/16/32
//! 0xca/0xcb  float 32/64           0xcc-0xcf  uint 8/16/32/64
//! 0xd0-0xd3  int 8/16/32/64        0xd4-0xd8  fixext 1/2/4/8/16
//! 0xd9-0xdb  str 8/16/32           0xdc/0xdd  array 16/32
//! 0xde/0xdf  map 16/32             0xe0-0xff  negative fixint
//! ```

#![allow(missing_docs)]

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const BIN8: u8 = 0xc4;
pub const BIN16: u8 = 0xc5;
pub const BIN32: u8 = 0xc6;

pub const EXT8: u8 = 0xc7;
pub const EXT16: u8 = 0xc8;
pub const EXT32: u8 = 0xc9;

pub const FLOAT32: u8 = 0xca;
pub const FLOAT64: u8 = 0xcb;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const FIXEXT1: u8 = 0xd4;
pub const FIXEXT2: u8 = 0xd5;
pub const FIXEXT4: u8 = 0xd6;
pub const FIXEXT8: u8 = 0xd7;
pub const FIXEXT16: u8 = 0xd8;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const ARRAY16: u8 = 0xdc;
pub const ARRAY32: u8 = 0xdd;

pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// First code of the fixstr range (`0xa0..=0xbf`).
pub const FIXSTR_BASE: u8 = 0xa0;
/// Length mask for fixstr codes.
pub const FIXSTR_MASK: u8 = 0x1f;
/// First code of the fixarray range (`0x90..=0x9f`).
pub const FIXARRAY_BASE: u8 = 0x90;
/// First code of the fixmap range (`0x80..=0x8f`).
pub const FIXMAP_BASE: u8 = 0x80;
/// Length mask for fixarray and fixmap codes.
pub const FIXCONTAINER_MASK: u8 = 0x0f;

pub fn is_fixstr(c: u8) -> bool {
    (FIXSTR_BASE..=0xbf).contains(&c)
}

pub fn is_fixarray(c: u8) -> bool {
    (FIXARRAY_BASE..=0x9f).contains(&c)
}

pub fn is_fixmap(c: u8) -> bool {
    (FIXMAP_BASE..=0x8f).contains(&c)
}

pub fn is_positive_fixint(c: u8) -> bool {
    c <= 0x7f
}

pub fn is_negative_fixint(c: u8) -> bool {
    c >= 0xe0
}

/// True for every code that starts a length-prefixed string or binary
/// literal. Binary-coded literals are treated identically to string-coded
/// literals by the interning layer.
pub fn is_string_like(c: u8) -> bool {
    is_fixstr(c) || matches!(c, STR8 | STR16 | STR32 | BIN8 | BIN16 | BIN32)
}

/// True for the three fixed extension envelopes a reference may use.
pub fn is_reference_ext(c: u8) -> bool {
    matches!(c, FIXEXT1 | FIXEXT2 | FIXEXT4)
}
