// Glue (linking) morphemes inserted between two stems of a compound

use decompound_fsa::{Fsa, FsaError, State};

use crate::lexicon::Lexicon;

/// Linking morphemes of German compounds, in reading order.
pub const GLUE_MORPHEMES: [&str; 8] = ["e", "es", "en", "er", "n", "ens", "ns", "s"];

/// Automaton over the reversed glue morphemes.
///
/// Entries carry no terminator: acceptance is the automaton's own final state.
#[derive(Debug, Clone)]
pub struct GlueMorphemes {
    fsa: Fsa,
}

impl GlueMorphemes {
    /// Build the automaton for [`GLUE_MORPHEMES`].
    pub fn new() -> Result<Self, FsaError> {
        Self::from_morphemes(GLUE_MORPHEMES)
    }

    /// Build an automaton for a custom set of morphemes given in reading order.
    pub fn from_morphemes<I, S>(morphemes: I) -> Result<Self, FsaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reversed: Vec<String> = morphemes
            .into_iter()
            .map(|m| m.as_ref().chars().rev().collect())
            .collect();
        // The builder needs ascending input.
        reversed.sort_unstable();
        let fsa = Fsa::from_sorted(&reversed)?;
        Ok(Self { fsa })
    }

    /// Whether `morpheme` (in reading order) is one of the glue morphemes.
    pub fn contains(&self, morpheme: &str) -> bool {
        let reversed: String = morpheme.chars().rev().collect();
        self.fsa.contains(&reversed)
    }
}

impl Lexicon for GlueMorphemes {
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
        self.fsa.is_final(state)
    }
}
