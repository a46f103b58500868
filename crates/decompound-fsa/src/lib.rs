//! Acyclic deterministic automaton engine.
//!
//! This crate loads, queries and builds the compact binary automatons used as
//! dictionaries by the compound splitter. An automaton is a set of strings
//! over Unicode scalar values; queries walk it one character at a time.
//!
//! # Architecture
//!
//! - [`format`] -- Binary header parsing and validation
//! - [`symbols`] -- Symbol table (char-to-index mapping)
//! - [`transition`] -- Zero-copy transition record layout
//! - [`fsa`] -- Automaton loading, validation and traversal
//! - [`builder`] -- Incremental minimal automaton construction from sorted input

pub mod builder;
pub mod format;
pub mod fsa;
pub mod symbols;
pub mod transition;

pub use builder::FsaBuilder;
pub use fsa::Fsa;

/// Error type for automaton parsing, loading and building.
#[derive(Debug, thiserror::Error)]
pub enum FsaError {
    #[error("invalid magic number in automaton header")]
    InvalidMagic,
    #[error("unsupported automaton format version {0}")]
    UnsupportedVersion(u8),
    #[error("file too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("invalid symbol table: {0}")]
    InvalidSymbolTable(String),
    #[error("invalid transition at slot {slot}: {reason}")]
    InvalidTransition { slot: usize, reason: &'static str },
    #[error("input not sorted: {current:?} must not follow {previous:?}")]
    Unsorted { previous: String, current: String },
    #[error("too many distinct symbols: {0}")]
    TooManySymbols(usize),
    #[error("transition table too large: {0} slots")]
    TooManyStates(usize),
}

/// Handle to a state of an [`Fsa`].
///
/// A state is the slot index of its head record in the transition table. Handles
/// are only meaningful for the automaton that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State(pub(crate) u32);
