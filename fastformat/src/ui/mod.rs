// fastformat/src/ui/mod.rs
//! Console rendering helpers for the fastformat CLI.

pub mod summary;
