// Word list parsing for dictionary compilation
//
// One entry per line: the first whitespace-separated token, case folded.
// Everything from '#' to the end of the line is a comment.

use std::io::{self, BufRead};

use decompound_core::normalize::fold_case;

/// Start of a comment.
pub const COMMENT_CHAR: char = '#';

/// Extract the entry of one word list line, if any.
pub fn parse_entry(line: &str) -> Option<String> {
    let content = match line.split_once(COMMENT_CHAR) {
        Some((before, _)) => before,
        None => line,
    };
    content.split_whitespace().next().map(fold_case)
}

/// Read all entries of a word list.
pub fn read_word_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_entry(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_is_the_entry() {
        assert_eq!(parse_entry("Achse\tNOUN\t12").as_deref(), Some("achse"));
        assert_eq!(parse_entry("  hund  ").as_deref(), Some("hund"));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        assert_eq!(parse_entry("# header"), None);
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("   "), None);
        assert_eq!(parse_entry("Ei # trailing note").as_deref(), Some("ei"));
        assert_eq!(parse_entry("ei#x").as_deref(), Some("ei"));
    }

    #[test]
    fn reads_a_whole_list() {
        let text = "# stems\nBewegung\nachse 5\n\nHund # animal\n";
        let words = read_word_list(text.as_bytes()).unwrap();
        assert_eq!(words, ["bewegung", "achse", "hund"]);
    }
}
