//! Fixture serialization
//!
//! Renders cryptographic material in the formats consumed around the
//! hardware testbench. Nothing here knows about ChaCha20; every function
//! takes plain bytes.
//!
//! Two byte orders are in play and they are deliberately kept in separate
//! functions:
//!
//! - [`to_le_words`] flips bytes **inside each 32-bit word** and keeps the
//!   words in input order. This is the file format the testbench reads.
//! - [`to_literal`] reverses the **entire buffer** and emits one hex
//!   number. This is the form pasted into hardware source as a register
//!   initial value.
//!
//! [`hexdump`] is diagnostic output only.

mod hexdump;
mod literal;
mod words;

pub use hexdump::hexdump;
pub use literal::{declaration, from_literal, to_literal};
pub use words::{WORD_LEN, from_le_words, to_le_words, write_le_words};
