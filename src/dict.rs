//! Per-stream interning dictionaries.
//!
//! Two independently operated, symmetric structures: the encoder maps each
//! eligible string to the index of its first occurrence, the decoder keeps
//! the mirror image as an append-only list where the Nth interned literal
//! occupies position N. Neither side ever communicates indices out of band;
//! they stay in lockstep purely from the order in which literals cross the
//! wire. Indices are never reused or removed, and both structures live
//! exactly as long as their owning encoder/decoder instance.

use std::collections::HashMap;

use crate::error::{PackError, Result};

/// Strings shorter than this are cheaper as plain literals than as
/// references (a reference takes at least 3 bytes on the wire) and are
/// never interned.
pub const MIN_INTERN_LEN: usize = 3;

/// Hard cap on dictionary entries. Once reached, new eligible strings stay
/// literal for the remainder of the instance's lifetime.
pub const MAX_DICT_ENTRIES: usize = u16::MAX as usize;

/// Whether a literal of length `len` participates in interning at all.
pub fn eligible(len: usize) -> bool {
    len >= MIN_INTERN_LEN
}

/// Write-side dictionary: string → index of first occurrence.
#[derive(Debug, Default)]
pub struct EncodeDict {
    map: HashMap<String, u32>,
}

impl EncodeDict {
    /// Empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of a previously interned string.
    pub fn get(&self, s: &str) -> Option<u32> {
        self.map.get(s).copied()
    }

    /// Intern a first-occurrence string, returning its assigned index, or
    /// `None` if the dictionary is full. The caller has already checked
    /// eligibility and absence.
    pub fn intern(&mut self, s: &str) -> Option<u32> {
        if self.map.len() >= MAX_DICT_ENTRIES {
            return None;
        }
        let idx = self.map.len() as u32;
        self.map.insert(s.to_string(), idx);
        tracing::trace!(index = idx, len = s.len(), "interned string on encode side");
        Some(idx)
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Read-side dictionary: append-only list where index = position.
#[derive(Debug, Default)]
pub struct DecodeDict {
    entries: Vec<String>,
}

impl DecodeDict {
    /// Empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a referenced string by index.
    pub fn get(&self, idx: u32) -> Result<&str> {
        self.entries
            .get(idx as usize)
            .map(String::as_str)
            .ok_or(PackError::IndexOutOfRange(idx))
    }

    /// Append a freshly decoded literal, mirroring the encoder's index
    /// assignment. No-op once the cap is reached.
    pub fn intern(&mut self, s: &str) {
        if self.entries.len() >= MAX_DICT_ENTRIES {
            return;
        }
        tracing::trace!(
            index = self.entries.len(),
            len = s.len(),
            "interned string on decode side"
        );
        self.entries.push(s.to_string());
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
