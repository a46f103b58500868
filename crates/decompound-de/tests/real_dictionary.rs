//! Smoke tests against a real compiled stem dictionary.
//!
//! These tests require a dictionary artifact. Set DECOMPOUND_DICT_PATH to the
//! artifact file, or to a directory containing `words.fsa`. Without it the
//! tests print a notice and pass.
//!
//! Run: DECOMPOUND_DICT_PATH=/path/to/words.fsa cargo test -p decompound-de --test real_dictionary

use std::path::PathBuf;
use std::sync::Arc;

use decompound_de::{CompoundDictionaries, Segmenter};

fn find_dictionary() -> Option<PathBuf> {
    let path = PathBuf::from(std::env::var_os("DECOMPOUND_DICT_PATH")?);
    if path.is_file() {
        return Some(path);
    }
    let path = path.join("words.fsa");
    path.is_file().then_some(path)
}

fn create_segmenter() -> Option<Segmenter> {
    let Some(path) = find_dictionary() else {
        eprintln!("SKIP: dictionary not found. Set DECOMPOUND_DICT_PATH to a compiled words.fsa");
        return None;
    };
    let dicts = CompoundDictionaries::open(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e));
    Some(Segmenter::new(Arc::new(dicts)))
}

#[test]
fn common_compounds_split() {
    let Some(mut segmenter) = create_segmenter() else {
        return;
    };
    for word in ["Bewegungsachse", "Anwendungsprogrammschnittstelle", "Hundehütte"] {
        let result = segmenter.split(word);
        assert!(result.is_some(), "{word} should split");
        let first = result.as_ref().and_then(|r| r.first()).map(|d| d.word_count());
        assert!(first >= Some(2), "{word}: {result:?}");
    }
}

#[test]
fn non_words_do_not_split() {
    let Some(mut segmenter) = create_segmenter() else {
        return;
    };
    for word in ["", "x", "1234", "qqqqqqqq"] {
        assert_eq!(segmenter.split_to_string(word), None, "{word:?}");
    }
}
