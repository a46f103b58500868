// Query contract shared by the stem dictionary and the glue morpheme automaton

use decompound_fsa::State;

/// An automaton answering "does an entry end here" while walking characters.
pub trait Lexicon {
    /// The state before any character is consumed.
    fn start(&self) -> State;

    /// Consume one character.
    fn step(&self, state: State, ch: char) -> Option<State>;

    /// Whether the characters consumed so far form a complete entry.
    fn accepts(&self, state: State) -> bool;
}

/// Append to `ends` the end offset of every entry that starts at `offset` in `seq`.
///
/// Offsets come out ascending. The walk is a single pass that stops at the
/// first character without a transition.
pub fn collect_matches<L>(lexicon: &L, seq: &[char], offset: usize, ends: &mut Vec<usize>)
where
    L: Lexicon + ?Sized,
{
    let mut state = lexicon.start();
    for (i, &ch) in seq.iter().enumerate().skip(offset) {
        let Some(next) = lexicon.step(state, ch) else {
            break;
        };
        state = next;
        if lexicon.accepts(state) {
            ends.push(i + 1);
        }
    }
}
