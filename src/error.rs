//! Internpack error types.
//!
//! All errors are fatal for the current encode/decode call and propagate to
//! the caller unmodified; nothing is retried internally. The one deliberate
//! exception is [`PackError::UnexpectedCode`]: the interface-typed decode
//! entry point treats it as a routing signal (rewind one byte, delegate to
//! the generic value decoder) rather than a user-visible failure.

use thiserror::Error;

/// Internpack errors.
#[derive(Error, Debug)]
pub enum PackError {
    /// Reference envelope payload length is not 1, 2 or 4 bytes.
    #[error("unsupported interned string index length={0}")]
    MalformedIndexWidth(usize),

    /// Reference index points past the end of the decode dictionary.
    #[error("interned string with index={0} does not exist")]
    IndexOutOfRange(u32),

    /// Extension envelope carries a type id other than the reserved
    /// interned-string id where a reference was expected.
    #[error("got ext type={got}, wanted {want}")]
    ExtensionTypeMismatch {
        /// Type id found on the wire.
        got: i8,
        /// The reserved interned-string type id.
        want: i8,
    },

    /// Encode-side index exceeds the 4-byte reference payload range.
    #[error("intern string index={0} is too large")]
    IndexOverflow(u64),

    /// Wire code is neither nil, a literal, nor a reserved reference, in a
    /// context requiring one. Callers other than the interface-typed
    /// dispatch must treat this as fatal.
    #[error("unexpected code=0x{0:02x}")]
    UnexpectedCode(u8),

    /// Hard form of [`PackError::UnexpectedCode`] raised by the string-only
    /// decode entry point.
    #[error("invalid code=0x{0:02x} decoding interned string")]
    InvalidStringCode(u8),

    /// Attempt to register an application extension under the reserved
    /// interned-string type id.
    #[error("ext type={0} is reserved for interned strings")]
    ReservedExtType(i8),

    /// Extension type id already registered.
    #[error("ext type={0} is already registered")]
    DuplicateExtType(i8),

    /// String payload is not valid UTF-8.
    #[error("invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Collection or blob too large for its chosen wire envelope.
    #[error("value of length={0} does not fit any wire envelope")]
    ValueTooLarge(usize),

    /// Rewind requested with no byte available to push back.
    #[error("no byte available to unread")]
    NothingToUnread,

    /// I/O error from the underlying byte stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for internpack operations.
pub type Result<T> = std::result::Result<T, PackError>;
