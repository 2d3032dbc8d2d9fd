//! Database Dump Generator Core Library
//!
//! Compiling a SQL dump (schema, row-level security policies, functions,
//! triggers, data) is not implemented yet. For now the library only provides
//! the notice that the generator prints when invoked.

pub mod notice;

// Re-export commonly used types
pub use notice::{EmitterState, NoticeEmitter, NOTICE};
