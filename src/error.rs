/*!
error.rs - Failure modes surfaced by the CPU core.

Overview
========
The 6809 core never panics on architecturally-defined conditions: register
wraparound, CC bit toggling, and stack pointer arithmetic are all specified
behavior (spec-level, not exceptional) and simply happen. Only two decode-time
conditions are genuinely exceptional and get a `Result`:

  - An opcode (or page-2/page-3 opcode pair) absent from the dispatch table.
  - A reserved indexed-addressing post-byte pattern (single-step auto
    increment/decrement combined with the indirect bit).

Both are surfaced to the caller rather than recovered from automatically,
per the open design question in the reference material this core follows.
`step`/`run` propagate `CoreError` with `?`; nothing downstream of dispatch
needs to construct one.
*/

use thiserror::Error;

/// Failure modes the CPU core can report. See module docs for the two
/// decode-time conditions that produce these; everything else (wraparound,
/// flag updates) is specified behavior, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A one- or two-byte opcode with no entry in the dispatch table.
    #[error("illegal opcode at ${pc:04X}: {bytes:02X?}")]
    IllegalOpcode {
        /// Address the opcode was fetched from.
        pc: u16,
        /// The one or two opcode bytes that failed to decode (second byte
        /// is `0` and unused when the opcode is single-byte).
        bytes: [u8; 2],
    },

    /// A reserved indexed-addressing post-byte (single-step `,R+`/`,-R`
    /// combined with the indirect bit).
    #[error("invalid indexed post-byte ${postbyte:02X} at ${pc:04X}")]
    InvalidIndexedPostbyte {
        /// Address of the instruction's opcode (not the post-byte itself).
        pc: u16,
        /// The offending post-byte.
        postbyte: u8,
    },
}

/// Convenience alias used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;
