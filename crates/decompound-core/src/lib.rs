// decompound-core: shared types for compound word splitting.

pub mod chunk;
pub mod decomposition;
pub mod normalize;

pub use chunk::{Chunk, ChunkKind};
pub use decomposition::{Component, Decomposition, Decompositions};

/// Maximum number of characters in a word accepted for splitting.
pub const MAX_WORD_CHARS: usize = 255;
