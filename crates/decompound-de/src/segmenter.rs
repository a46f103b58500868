// Segmenter: search for the decompositions with the fewest chunks
//
// The word is normalized into a reversed code-point sequence and covered from
// offset 0 (the end of the original word) by stems, with an optional glue
// morpheme between two stems. The search is a dynamic program over states
// (offset, previous chunk was a stem): first the fewest chunks from every
// state to the end, then the distinct stem sequences along those minimal
// edges, built from the end of the sequence backwards. Each state is expanded
// once, so a glue morpheme that is also a stem ("er") cannot make the number
// of explored paths grow exponentially.

use std::ops::Range;
use std::sync::Arc;

use decompound_core::normalize::normalize_reversed;
use decompound_core::{Chunk, Decomposition, Decompositions, MAX_WORD_CHARS};
use hashbrown::{HashMap, HashSet};

use crate::dictionaries::CompoundDictionaries;
use crate::lexicon::collect_matches;

/// Options controlling a [`Segmenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmenterOptions {
    /// Longest normalized word, in characters, that is searched at all.
    pub max_word_chars: usize,
    /// Report a bare dictionary stem as a one-word decomposition.
    pub keep_single_stem: bool,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            max_word_chars: MAX_WORD_CHARS,
            keep_single_stem: false,
        }
    }
}

const UNREACHABLE: usize = usize::MAX;

/// Key of the empty stem sequence.
const NO_WORDS: usize = 0;

/// Link to the rest of a decomposition; `None` once the word is covered.
type Link = Option<usize>;

/// One chunk of a minimal completion, linked to the completion that follows it.
#[derive(Debug, Clone, Copy)]
struct TailNode {
    chunk: Chunk,
    next: Link,
    /// Interned stem sequence from this chunk to the end.
    key: usize,
}

/// Index of the search state at `offset`.
#[inline]
fn state(offset: usize, after_word: bool) -> usize {
    offset * 2 + usize::from(after_word)
}

/// Per-call search state, reused across calls.
#[derive(Debug, Default)]
struct Scratch {
    /// Normalized, reversed input.
    sequence: Vec<char>,
    /// Candidate end offsets of stems and glue morphemes, for all offsets.
    ends: Vec<usize>,
    /// Per offset, the range of `ends` holding stem ends (ascending).
    stem_spans: Vec<Range<usize>>,
    /// Per offset, the range of `ends` holding glue morpheme ends (ascending).
    glue_spans: Vec<Range<usize>>,
    /// Fewest chunks from an offset to the end when the previous chunk was a stem.
    after_word: Vec<usize>,
    /// Fewest chunks from an offset to the end when a stem must come next.
    after_glue: Vec<usize>,
    nodes: Vec<TailNode>,
    /// Distinct minimal completions of every state, in preference order.
    tails: Vec<Vec<Link>>,
    /// Interned stem sequences: (stem text, key of the rest) to key.
    keys: HashMap<(String, usize), usize>,
    seen: HashSet<usize>,
    chunks: Vec<Chunk>,
}

impl Scratch {
    fn reset(&mut self) {
        let len = self.sequence.len();
        self.ends.clear();
        self.stem_spans.clear();
        self.glue_spans.clear();
        self.after_word.clear();
        self.after_word.resize(len + 1, UNREACHABLE);
        self.after_glue.clear();
        self.after_glue.resize(len + 1, UNREACHABLE);
        self.nodes.clear();
        self.tails.iter_mut().for_each(Vec::clear);
        self.tails.resize_with(state(len, true) + 1, Vec::new);
        self.keys.clear();
        self.seen.clear();
        self.chunks.clear();
    }

    fn collect_candidates(&mut self, dictionaries: &CompoundDictionaries) {
        for offset in 0..self.sequence.len() {
            let start = self.ends.len();
            collect_matches(dictionaries.stems(), &self.sequence, offset, &mut self.ends);
            let middle = self.ends.len();
            collect_matches(dictionaries.glue(), &self.sequence, offset, &mut self.ends);
            self.stem_spans.push(start..middle);
            self.glue_spans.push(middle..self.ends.len());
        }
    }

    /// Fill the fewest-chunks tables from the end of the sequence backwards.
    fn measure(&mut self) {
        let len = self.sequence.len();
        self.after_word[len] = 0;
        for offset in (0..len).rev() {
            let stem = self.ends[self.stem_spans[offset].clone()]
                .iter()
                .map(|&end| self.after_word[end].saturating_add(1))
                .min()
                .unwrap_or(UNREACHABLE);
            // A glue morpheme is never the last chunk.
            let glue = self.ends[self.glue_spans[offset].clone()]
                .iter()
                .filter(|&&end| end < len)
                .map(|&end| self.after_glue[end].saturating_add(1))
                .min()
                .unwrap_or(UNREACHABLE);
            self.after_glue[offset] = stem;
            self.after_word[offset] = stem.min(glue);
        }
    }

    /// Collect the distinct minimal completions of every reachable state.
    ///
    /// Longer stems come first, then continuations through glue morphemes,
    /// shortest first. Completions with the same stem texts as an earlier one
    /// are dropped.
    fn enumerate(&mut self) {
        let len = self.sequence.len();
        self.tails[state(len, true)].push(None);

        for offset in (0..len).rev() {
            for after_word in [false, true] {
                let fewest = if after_word {
                    self.after_word[offset]
                } else {
                    self.after_glue[offset]
                };
                if fewest == UNREACHABLE {
                    continue;
                }

                let mut built = std::mem::take(&mut self.tails[state(offset, after_word)]);
                self.seen.clear();
                for j in self.stem_spans[offset].clone().rev() {
                    let end = self.ends[j];
                    if self.after_word[end].saturating_add(1) == fewest {
                        self.extend(&mut built, Chunk::word(offset, end), state(end, true));
                    }
                }
                if after_word {
                    for j in self.glue_spans[offset].clone() {
                        let end = self.ends[j];
                        if end < len && self.after_glue[end].saturating_add(1) == fewest {
                            self.extend(&mut built, Chunk::glue(offset, end), state(end, false));
                        }
                    }
                }
                self.tails[state(offset, after_word)] = built;
            }
        }
    }

    /// Prefix `chunk` to every completion of `next_state` not seen yet in this state.
    fn extend(&mut self, built: &mut Vec<Link>, chunk: Chunk, next_state: usize) {
        for i in 0..self.tails[next_state].len() {
            let next = self.tails[next_state][i];
            let rest = match next {
                Some(id) => self.nodes[id].key,
                None => NO_WORDS,
            };
            let key = if chunk.is_word() {
                let fresh = self.keys.len() + 1;
                let text = chunk.text(&self.sequence);
                *self.keys.entry((text, rest)).or_insert(fresh)
            } else {
                rest
            };
            if !self.seen.insert(key) {
                continue;
            }
            built.push(Some(self.nodes.len()));
            self.nodes.push(TailNode { chunk, next, key });
        }
    }

    /// Materialize the completions of the start state.
    fn decompositions(&mut self) -> Vec<Decomposition> {
        let start = &self.tails[state(0, false)];
        let mut out = Vec::with_capacity(start.len());
        for &link in start {
            self.chunks.clear();
            let mut cursor = link;
            while let Some(id) = cursor {
                let node = self.nodes[id];
                self.chunks.push(node.chunk);
                cursor = node.next;
            }
            out.push(Decomposition::from_chunks(&self.sequence, &self.chunks));
        }
        out
    }
}

/// Compound splitter over shared dictionaries.
///
/// Holds its own scratch buffers, so `split` takes `&mut self`. Use one
/// segmenter per thread; the dictionaries behind the `Arc` are shared.
#[derive(Debug)]
pub struct Segmenter {
    dictionaries: Arc<CompoundDictionaries>,
    options: SegmenterOptions,
    scratch: Scratch,
}

impl Segmenter {
    pub fn new(dictionaries: Arc<CompoundDictionaries>) -> Self {
        Self::with_options(dictionaries, SegmenterOptions::default())
    }

    pub fn with_options(dictionaries: Arc<CompoundDictionaries>, options: SegmenterOptions) -> Self {
        Self {
            dictionaries,
            options,
            scratch: Scratch::default(),
        }
    }

    pub fn options(&self) -> &SegmenterOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SegmenterOptions) {
        self.options = options;
    }

    /// Split `word` into its stems.
    ///
    /// Returns every decomposition with the fewest chunks (glue morphemes
    /// counted), one per distinct stem sequence, or `None` when the word is not
    /// a recognized compound. Empty input and input with characters other than
    /// letters and hyphens give `None`.
    pub fn split(&mut self, word: &str) -> Option<Decompositions> {
        let scratch = &mut self.scratch;
        if !normalize_reversed(word, &mut scratch.sequence) {
            log::trace!("rejected {word:?}: not a letter sequence");
            return None;
        }
        if scratch.sequence.len() > self.options.max_word_chars {
            log::trace!(
                "rejected {word:?}: {} characters exceeds {}",
                scratch.sequence.len(),
                self.options.max_word_chars
            );
            return None;
        }
        scratch.reset();
        scratch.collect_candidates(&self.dictionaries);
        scratch.measure();
        if scratch.after_glue[0] == UNREACHABLE {
            return None;
        }
        scratch.enumerate();

        let keep_single_stem = self.options.keep_single_stem;
        let items: Vec<Decomposition> = scratch
            .decompositions()
            .into_iter()
            .filter(|d| keep_single_stem || d.word_count() > 1)
            .collect();
        if items.is_empty() {
            return None;
        }
        Some(Decompositions::new(items))
    }

    /// Split `word` and render the result as `a.b,c.d`.
    pub fn split_to_string(&mut self, word: &str) -> Option<String> {
        self.split(word).map(|d| d.to_string())
    }
}
