// Stem dictionary: an automaton over reversed, terminated surface forms
//
// Every entry is stored lowercased and reversed with ENTRY_TERMINATOR appended,
// so walking the reversed input forward discovers all stems that end at the
// current position of the original word. A stem is complete when the
// terminator can be consumed from the current state.

use std::collections::BTreeSet;

use decompound_core::normalize::normalize_reversed;
use decompound_fsa::{Fsa, FsaError, State};

use crate::lexicon::Lexicon;

/// Reserved symbol appended to every stored entry.
///
/// Not a letter, so it can never occur in normalized input.
pub const ENTRY_TERMINATOR: char = '<';

/// Stem dictionary adapter over a precompiled automaton.
#[derive(Debug, Clone)]
pub struct StemDictionary {
    fsa: Fsa,
}

impl StemDictionary {
    /// Wrap an automaton built from reversed, terminated entries.
    pub fn from_fsa(fsa: Fsa) -> Self {
        Self { fsa }
    }

    /// Load a precompiled dictionary artifact.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FsaError> {
        Fsa::from_bytes(data).map(Self::from_fsa)
    }

    /// Compile a dictionary from surface forms.
    ///
    /// Entries are case folded, stripped of hyphens, reversed and terminated,
    /// then deduplicated and sorted. Entries with characters other than
    /// letters and hyphens are skipped.
    pub fn compile<I, S>(words: I) -> Result<Self, FsaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = BTreeSet::new();
        let mut buf = Vec::new();
        let mut skipped = 0usize;
        for word in words {
            if !normalize_reversed(word.as_ref(), &mut buf) {
                skipped += 1;
                continue;
            }
            buf.push(ENTRY_TERMINATOR);
            entries.insert(buf.iter().collect::<String>());
        }

        let fsa = Fsa::from_sorted(&entries)?;
        log::debug!(
            "compiled stem dictionary: {} entries ({} skipped), {} states, {} symbols",
            entries.len(),
            skipped,
            fsa.state_count(),
            fsa.symbol_count()
        );
        Ok(Self::from_fsa(fsa))
    }

    /// Whether `word` (in reading order) is a stem of this dictionary.
    ///
    /// The word is normalized the same way entries are during compilation.
    pub fn contains(&self, word: &str) -> bool {
        let mut entry = Vec::new();
        if !normalize_reversed(word, &mut entry) {
            return false;
        }
        entry.push(ENTRY_TERMINATOR);
        self.fsa.contains(&entry.iter().collect::<String>())
    }

    /// The underlying automaton, e.g. for writing it out with [`Fsa::to_bytes`].
    pub fn fsa(&self) -> &Fsa {
        &self.fsa
    }
}

impl Lexicon for StemDictionary {
    #[inline]
    fn start(&self) -> State {
        self.fsa.root()
    }

    #[inline]
    fn step(&self, state: State, ch: char) -> Option<State> {
        self.fsa.transition(state, ch)
    }

    #[inline]
    fn accepts(&self, state: State) -> bool {
        self.fsa.transition(state, ENTRY_TERMINATOR).is_some()
    }
}
