// CompoundDictionaries: the two automatons every segmenter consults
//
// Loaded once at startup and shared read-only (typically through an `Arc`)
// by any number of segmenters on any number of threads.

use std::io::BufRead;
use std::path::Path;

use decompound_fsa::Fsa;

use crate::DecompoundError;
use crate::dictionary::StemDictionary;
use crate::glue::GlueMorphemes;
use crate::wordlist;

/// The stem dictionary together with the glue morpheme automaton.
#[derive(Debug, Clone)]
pub struct CompoundDictionaries {
    stems: StemDictionary,
    glue: GlueMorphemes,
}

impl CompoundDictionaries {
    /// Pair a stem dictionary with the standard glue morphemes.
    pub fn new(stems: StemDictionary) -> Result<Self, DecompoundError> {
        let glue = GlueMorphemes::new()?;
        Ok(Self { stems, glue })
    }

    /// Load from the bytes of a precompiled dictionary artifact.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecompoundError> {
        let stems = StemDictionary::from_bytes(data)?;
        log::debug!(
            "loaded stem dictionary: {} bytes, {} states, {} symbols",
            data.len(),
            stems.fsa().state_count(),
            stems.fsa().symbol_count()
        );
        Self::new(stems)
    }

    /// Load a precompiled dictionary artifact from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecompoundError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| DecompoundError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data)
    }

    /// Use an automaton built from reversed, terminated entries.
    pub fn from_fsa(fsa: Fsa) -> Result<Self, DecompoundError> {
        Self::new(StemDictionary::from_fsa(fsa))
    }

    /// Compile the stem dictionary from a word list in-process.
    pub fn from_word_list<R: BufRead>(reader: R) -> Result<Self, DecompoundError> {
        let words = wordlist::read_word_list(reader).map_err(DecompoundError::WordList)?;
        Self::from_words(&words)
    }

    /// Compile the stem dictionary from surface forms in-process.
    pub fn from_words<I, S>(words: I) -> Result<Self, DecompoundError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(StemDictionary::compile(words)?)
    }

    pub fn stems(&self) -> &StemDictionary {
        &self.stems
    }

    pub fn glue(&self) -> &GlueMorphemes {
        &self.glue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn shareable_between_threads() {
        assert_send_sync::<CompoundDictionaries>();
    }

    #[test]
    fn from_word_list_compiles_stems() {
        let text = "# test\nBewegung\nAchse\n";
        let dicts = CompoundDictionaries::from_word_list(text.as_bytes()).unwrap();
        assert!(dicts.stems().contains("bewegung"));
        assert!(dicts.glue().contains("s"));
    }

    #[test]
    fn bytes_round_trip() {
        let dicts = CompoundDictionaries::from_words(["hund", "h\u{00fc}tte"]).unwrap();
        let bytes = dicts.stems().fsa().to_bytes();
        let loaded = CompoundDictionaries::from_bytes(&bytes).unwrap();
        assert!(loaded.stems().contains("h\u{00fc}tte"));
    }

    #[test]
    fn corrupt_artifact_is_refused() {
        let err = CompoundDictionaries::from_bytes(b"not an automaton").unwrap_err();
        assert!(matches!(err, DecompoundError::DictionaryLoad(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CompoundDictionaries::open("/nonexistent/words.fsa").unwrap_err();
        match err {
            DecompoundError::Io { path, .. } => assert!(path.ends_with("words.fsa")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
