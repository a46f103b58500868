// Input normalization: hyphen stripping, case folding, reversal

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Check whether a character is a hyphen that may separate compound parts.
pub fn is_hyphen(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{00AD}' // SOFT HYPHEN
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
    )
}

/// Check whether a character may appear in a word to be split.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

// ---------------------------------------------------------------------------
// Case folding
// ---------------------------------------------------------------------------

/// Lowercase every character of `word`.
///
/// Dictionary entries and input words go through the same folding, so a
/// character whose lowercase form expands to several characters still matches.
pub fn fold_case(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

// ---------------------------------------------------------------------------
// Word normalization
// ---------------------------------------------------------------------------

/// Normalize `word` into `out` as reversed, lowercased characters with hyphens removed.
///
/// Returns `false` (leaving `out` in an unspecified state) if the word is empty
/// after hyphen removal or contains anything other than letters and hyphens.
/// The reversal is per Unicode scalar value, never per byte.
pub fn normalize_reversed(word: &str, out: &mut Vec<char>) -> bool {
    out.clear();
    for c in word.chars() {
        if is_hyphen(c) {
            continue;
        }
        if !is_word_char(c) {
            return false;
        }
        out.extend(c.to_lowercase());
    }
    out.reverse();
    !out.is_empty()
}

/// Normalized form of `word` in reading order, or `None` if it is not a valid word.
pub fn normalize(word: &str) -> Option<String> {
    let mut buf = Vec::with_capacity(word.len());
    normalize_reversed(word, &mut buf).then(|| buf.iter().rev().collect())
}
