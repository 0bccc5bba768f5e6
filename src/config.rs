//! Wire configuration and extension-type registration.
//!
//! MessagePack extension types are application-defined, but one id is
//! reserved here for interned-string references: [`INTERNED_STRING_EXT_ID`],
//! the minimum `i8` value, chosen to sit outside the range applications
//! typically claim for themselves.
//!
//! Registration happens once at initialization and produces a [`WireConfig`]
//! handed to both [`Encoder`](crate::Encoder) and
//! [`Decoder`](crate::Decoder) constructors, so instances stay independently
//! testable instead of sharing a process-wide mutable table.

use std::collections::HashSet;

use crate::error::{PackError, Result};

/// Extension type id reserved for interned-string references.
pub const INTERNED_STRING_EXT_ID: i8 = i8::MIN;

/// Shared wire-level configuration for one encoder/decoder pair.
///
/// Both sides of a stream must be built from equivalent configurations;
/// there is no in-band negotiation.
#[derive(Debug, Clone)]
pub struct WireConfig {
    intern_strings: bool,
    ext_ids: HashSet<i8>,
}

impl Default for WireConfig {
    /// String interning registered, no application extension types.
    fn default() -> Self {
        Self {
            intern_strings: true,
            ext_ids: HashSet::new(),
        }
    }
}

impl WireConfig {
    /// Configuration with string interning registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration without the interned-string registration: reserved-id
    /// envelopes decode as opaque [`Value::Ext`](crate::Value::Ext) instead
    /// of dictionary references.
    pub fn without_string_interning() -> Self {
        Self {
            intern_strings: false,
            ext_ids: HashSet::new(),
        }
    }

    /// Register an application extension type id.
    ///
    /// Fails with [`PackError::ReservedExtType`] for the interned-string id
    /// and [`PackError::DuplicateExtType`] for an id registered twice.
    pub fn register_ext(&mut self, id: i8) -> Result<()> {
        if id == INTERNED_STRING_EXT_ID {
            return Err(PackError::ReservedExtType(id));
        }
        if !self.ext_ids.insert(id) {
            return Err(PackError::DuplicateExtType(id));
        }
        Ok(())
    }

    /// Whether the interned-string reference decoder is registered.
    pub fn interning_registered(&self) -> bool {
        self.intern_strings
    }

    /// Whether `id` was registered as an application extension type.
    pub fn ext_registered(&self, id: i8) -> bool {
        self.ext_ids.contains(&id)
    }
}
