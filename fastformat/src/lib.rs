// fastformat/src/lib.rs
//! # FastFormat CLI
//!
//! This crate provides the command-line front end for the
//! `fastformat-core` rewrite engine: a thin adapter that reads text,
//! applies the configured shorthand cascade, and reports per-rule
//! outcomes.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
