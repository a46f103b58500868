// Decomposition result types and their `.`/`,` text form

use std::fmt;

use crate::chunk::{Chunk, ChunkKind};

/// Separator between the stems of one decomposition.
pub const WORD_SEPARATOR: char = '.';

/// Separator between alternative decompositions.
pub const ALTERNATIVE_SEPARATOR: char = ',';

/// One part of a decomposition in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    pub text: String,
    pub kind: ChunkKind,
}

/// A full-cover decomposition of one word.
///
/// Holds every chunk, glue morphemes included, so the components concatenate
/// to the normalized word. Rendering keeps only the stems.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decomposition {
    components: Vec<Component>,
}

impl Decomposition {
    /// Build a decomposition from a chunk stack over the reversed sequence.
    ///
    /// The stack lists chunks in the order they were matched, which is right
    /// to left in the original word; the components come out left to right.
    pub fn from_chunks(reversed: &[char], stack: &[Chunk]) -> Self {
        let components = stack
            .iter()
            .rev()
            .map(|chunk| Component {
                text: chunk.text(reversed),
                kind: chunk.kind,
            })
            .collect();
        Self { components }
    }

    /// All components, glue morphemes included, in reading order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The stems in reading order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .filter(|c| c.kind == ChunkKind::Word)
            .map(|c| c.text.as_str())
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Number of chunks (stems and glue morphemes).
    pub fn chunk_count(&self) -> usize {
        self.components.len()
    }

    /// Concatenation of all components: the normalized input word.
    pub fn surface(&self) -> String {
        self.components.iter().map(|c| c.text.as_str()).collect()
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                write!(f, "{WORD_SEPARATOR}")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// The alternative decompositions found for one word, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decompositions {
    items: Vec<Decomposition>,
}

impl Decompositions {
    pub fn new(items: Vec<Decomposition>) -> Self {
        Self { items }
    }

    /// The preferred decomposition: the first one discovered.
    pub fn first(&self) -> Option<&Decomposition> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decomposition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Decompositions {
    type Item = &'a Decomposition;
    type IntoIter = std::slice::Iter<'a, Decomposition>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Decompositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, "{ALTERNATIVE_SEPARATOR}")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
