//! German compound word splitter.
//!
//! Splits a compound such as "Bewegungsachse" into its dictionary stems
//! ("bewegung.achse"), consuming linking morphemes like the "s" between them.
//! The search walks a stem dictionary automaton and a small glue morpheme
//! automaton over the reversed input and reports every decomposition that uses
//! the fewest chunks.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use decompound_de::{CompoundDictionaries, Segmenter};
//!
//! let dictionaries = Arc::new(CompoundDictionaries::open("words.fsa")?);
//! let mut segmenter = Segmenter::new(Arc::clone(&dictionaries));
//! if let Some(result) = segmenter.split("Bewegungsachse") {
//!     println!("{result}");
//! }
//! # Ok::<(), decompound_de::DecompoundError>(())
//! ```
//!
//! # Architecture
//!
//! - [`lexicon`] -- Shared query contract for both automatons
//! - [`dictionary`] -- Stem dictionary adapter and dictionary compilation
//! - [`glue`] -- Linking morpheme automaton
//! - [`dictionaries`] -- The loaded pair, shared between segmenters
//! - [`wordlist`] -- Word list parsing for dictionary compilation
//! - [`segmenter`] -- The segmentation search

pub mod dictionaries;
pub mod dictionary;
pub mod glue;
pub mod lexicon;
pub mod segmenter;
pub mod wordlist;

use std::path::PathBuf;

pub use decompound_core::{Chunk, ChunkKind, Component, Decomposition, Decompositions};
pub use dictionaries::CompoundDictionaries;
pub use segmenter::{Segmenter, SegmenterOptions};

/// Error type for dictionary loading and compilation.
#[derive(Debug, thiserror::Error)]
pub enum DecompoundError {
    /// The automaton data is missing, truncated or corrupt.
    #[error("failed to load dictionary automaton: {0}")]
    DictionaryLoad(#[from] decompound_fsa::FsaError),

    /// A dictionary file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A word list could not be read.
    #[error("failed to read word list: {0}")]
    WordList(#[source] std::io::Error),
}
