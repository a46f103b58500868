//! Property tests for the segmenter over the fixture word list.

use std::sync::{Arc, OnceLock};

use decompound_core::normalize::normalize;
use decompound_de::{CompoundDictionaries, Segmenter};
use hashbrown::HashSet;
use proptest::prelude::*;

const STEMS: &[&str] = &[
    "achse", "anwendung", "bewegung", "hund", "hütte", "programm", "schnitt", "stelle", "stube",
    "tube", "wach", "wachs", "zeitung", "tag", "garten", "kinder",
];
const GLUE: &[&str] = &["", "", "s", "e", "es", "en", "er", "n", "ens", "ns"];

fn dictionaries() -> Arc<CompoundDictionaries> {
    static DICTS: OnceLock<Arc<CompoundDictionaries>> = OnceLock::new();
    Arc::clone(DICTS.get_or_init(|| Arc::new(CompoundDictionaries::from_words(STEMS).unwrap())))
}

/// A compound of 2..=4 stems joined by optional glue morphemes.
fn compound() -> impl Strategy<Value = String> {
    prop::collection::vec((prop::sample::select(STEMS), prop::sample::select(GLUE)), 2..=4).prop_map(
        |parts| {
            let last = parts.len() - 1;
            let mut word = String::new();
            for (i, (stem, glue)) in parts.into_iter().enumerate() {
                word.push_str(stem);
                if i < last {
                    word.push_str(glue);
                }
            }
            word
        },
    )
}

/// Arbitrary short words over letters that occur in the stems.
fn letters() -> impl Strategy<Value = String> {
    "[a-zü]{0,16}"
}

proptest! {
    #[test]
    fn built_compounds_always_split(word in compound()) {
        let mut segmenter = Segmenter::new(dictionaries());
        let result = segmenter.split(&word);
        prop_assert!(result.is_some(), "{}", word);
    }

    #[test]
    fn results_cover_the_word_with_equal_chunk_counts(word in prop_oneof![compound(), letters()]) {
        let mut segmenter = Segmenter::new(dictionaries());
        if let Some(result) = segmenter.split(&word) {
            let normalized = normalize(&word).unwrap();
            let counts: Vec<usize> = result.iter().map(|d| d.chunk_count()).collect();
            prop_assert!(counts.windows(2).all(|w| w[0] == w[1]), "{:?}", counts);
            let rendered: HashSet<String> = result.iter().map(|d| d.to_string()).collect();
            prop_assert_eq!(rendered.len(), result.len());
            for d in &result {
                prop_assert_eq!(d.surface(), normalized.clone());
                prop_assert!(d.word_count() >= 2);
                prop_assert!(d.to_string().split('.').all(|w| !w.is_empty()));
            }
        }
    }

    #[test]
    fn splitting_is_deterministic(word in prop_oneof![compound(), letters()]) {
        let mut first = Segmenter::new(dictionaries());
        let mut second = Segmenter::new(dictionaries());
        let expected = first.split_to_string(&word);
        prop_assert_eq!(first.split_to_string(&word), expected.clone());
        prop_assert_eq!(second.split_to_string(&word), expected);
    }

    #[test]
    fn case_and_hyphens_do_not_matter(word in compound(), cut in 1usize..8) {
        let mut segmenter = Segmenter::new(dictionaries());
        let expected = segmenter.split_to_string(&word);

        let upper = word.to_uppercase();
        prop_assert_eq!(segmenter.split_to_string(&upper), expected.clone());

        let chars: Vec<char> = word.chars().collect();
        let at = cut.min(chars.len() - 1);
        let hyphenated: String = chars[..at]
            .iter()
            .chain(std::iter::once(&'-'))
            .chain(chars[at..].iter())
            .collect();
        prop_assert_eq!(segmenter.split_to_string(&hyphenated), expected);
    }

    #[test]
    fn normalization_is_idempotent(word in "[A-Za-zÄÖÜäöüß-]{0,20}") {
        if let Some(once) = normalize(&word) {
            prop_assert_eq!(normalize(&once), Some(once.clone()));
        }
    }
}
