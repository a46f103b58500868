// Chunk: one classified span of a word under decomposition

/// Classification of a chunk of a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// A dictionary stem.
    Word,
    /// A linking morpheme between two stems, e.g. the "s" in "bewegungsachse".
    GlueMorpheme,
}

/// A half-open span `[start, end)` over the reversed, normalized character
/// sequence of the word being split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
    pub kind: ChunkKind,
}

impl Chunk {
    pub fn new(start: usize, end: usize, kind: ChunkKind) -> Self {
        debug_assert!(start < end);
        Self { start, end, kind }
    }

    pub fn word(start: usize, end: usize) -> Self {
        Self::new(start, end, ChunkKind::Word)
    }

    pub fn glue(start: usize, end: usize) -> Self {
        Self::new(start, end, ChunkKind::GlueMorpheme)
    }

    pub fn is_word(&self) -> bool {
        self.kind == ChunkKind::Word
    }

    /// The chunk's text in reading order, given the reversed sequence it spans.
    pub fn text(&self, reversed: &[char]) -> String {
        reversed[self.start..self.end].iter().rev().collect()
    }
}
