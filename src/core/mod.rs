//! Core domain types for Mastermind
//!
//! Codes, feedback scoring and the enumerated code space. Nothing here does
//! I/O or keeps state between calls.

mod code;
mod feedback;
mod space;

pub use code::Code;
pub use feedback::{Feedback, score};
pub use space::{CodeSpace, MAX_SPACE_SIZE};
