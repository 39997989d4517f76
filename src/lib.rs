//! Chainable, in-place operations over an owned sequence.
//!
//! [`SequenceWrapper`] holds a `Vec<T>` and exposes filtering, mutation and
//! deduplication as methods returning `&mut Self`. Changing the element type
//! goes through [`transform`] (or [`SequenceWrapper::map`]), which produces a
//! fresh wrapper.

pub mod error;
mod transform;
pub mod util;
mod wrapper;

pub use error::{Result, SequenceError};
pub use transform::{transform, try_transform};
pub use util::sequence::Sequence;
pub use wrapper::SequenceWrapper;
