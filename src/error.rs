//! Error type shared by every stage of fixture generation.
//!
//! Each variant corresponds to one way a run can fail. None of them is
//! recoverable inside a run: the caller reports the error and exits
//! without producing a partial fixture set.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the cipher, the serializers and the generator.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The key is not exactly 32 bytes long.
    #[error("invalid key length: expected 32 bytes, got {len}")]
    InvalidKeyLength { len: usize },

    /// The nonce is not exactly 12 bytes long.
    #[error("invalid nonce length: expected 12 bytes, got {len}")]
    InvalidNonceLength { len: usize },

    /// Word encoding was requested for a buffer whose length is not a
    /// multiple of 4.
    #[error("cannot split {len} bytes into 32-bit words")]
    MalformedWordAlignment { len: usize },

    /// The requested plaintext is smaller than one ChaCha20 block.
    #[error("plaintext of {bytes} bytes is smaller than one 64-byte block")]
    InsufficientPlaintextSize { bytes: usize },

    /// The plaintext size formula does not fit in `usize`.
    #[error("plaintext size overflows the address space")]
    PlaintextSizeOverflow,

    /// A line of a word file is not an 8-digit hex word.
    #[error("malformed word on line {line}: {reason}")]
    MalformedWord { line: usize, reason: String },

    /// A `<width>'h<hex>` literal could not be parsed.
    #[error("malformed literal: {0}")]
    MalformedLiteral(String),

    /// The operating system could not provide random bytes.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand::Error),

    /// Writing or committing an artifact failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FixtureError>;

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
