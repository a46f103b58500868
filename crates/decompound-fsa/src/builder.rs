// Incremental construction of a minimal acyclic automaton from sorted input.
//
// Words arrive in ascending code point order. Only the path of the most recent
// word can still change, so every state that drops off that path is final and
// is merged with an equivalent registered state, if one exists. Equivalence is
// structural: same acceptance and the same (label, target) edges, where
// targets are already canonical because paths are minimized bottom-up.

use std::cmp::Ordering;
use std::collections::{BTreeSet, VecDeque};

use hashbrown::HashMap;

use crate::symbols::SymbolTable;
use crate::transition::{DEAD_SYM, FINAL_SYM, MAX_TARGET, push_state, state_slots};
use crate::{Fsa, FsaError};

const ROOT: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct Node {
    is_final: bool,
    /// Outgoing edges, ascending by label.
    edges: Vec<(char, u32)>,
}

/// Builder for a minimal acyclic [`Fsa`].
#[derive(Debug)]
pub struct FsaBuilder {
    nodes: Vec<Node>,
    /// Canonical node for each signature of a minimized node.
    register: HashMap<Node, u32>,
    /// Edges along the last added word that are not minimized yet:
    /// (parent, label, child).
    unchecked: Vec<(u32, char, u32)>,
    previous: Vec<char>,
    word_count: usize,
}

impl Default for FsaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FsaBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            register: HashMap::new(),
            unchecked: Vec::new(),
            previous: Vec::new(),
            word_count: 0,
        }
    }

    /// Number of distinct words added so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Add the next word. Words must be added in ascending code point order;
    /// adding the previous word again is a no-op.
    pub fn add(&mut self, word: &str) -> Result<(), FsaError> {
        let chars: Vec<char> = word.chars().collect();
        if self.word_count > 0 {
            match chars.cmp(&self.previous) {
                Ordering::Less => {
                    return Err(FsaError::Unsorted {
                        previous: self.previous.iter().collect(),
                        current: word.to_string(),
                    });
                }
                Ordering::Equal => return Ok(()),
                Ordering::Greater => {}
            }
        }

        let common = chars
            .iter()
            .zip(&self.previous)
            .take_while(|(a, b)| a == b)
            .count();
        self.minimize(common);

        let mut node = self.unchecked.last().map_or(ROOT, |&(_, _, child)| child);
        for &ch in &chars[common..] {
            let next = self.nodes.len() as u32;
            self.nodes.push(Node::default());
            self.nodes[node as usize].edges.push((ch, next));
            self.unchecked.push((node, ch, next));
            node = next;
        }
        self.nodes[node as usize].is_final = true;

        self.previous = chars;
        self.word_count += 1;
        Ok(())
    }

    /// Minimize the remaining path and lay out the transition table.
    pub fn finish(mut self) -> Result<Fsa, FsaError> {
        self.minimize(0);
        self.register.clear();

        // Breadth-first slot assignment keeps the root at slot 0.
        let mut order = Vec::new();
        let mut slot_of: HashMap<u32, u32> = HashMap::new();
        let mut queue = VecDeque::from([ROOT]);
        let mut next_slot = 0usize;
        let mut labels = BTreeSet::new();

        while let Some(id) = queue.pop_front() {
            if slot_of.contains_key(&id) {
                continue;
            }
            let node = &self.nodes[id as usize];
            if next_slot > MAX_TARGET as usize {
                return Err(FsaError::TooManyStates(next_slot));
            }
            slot_of.insert(id, next_slot as u32);
            order.push(id);
            let records = node.edges.len() + usize::from(node.is_final);
            next_slot += state_slots(records).max(1);
            for &(ch, target) in &node.edges {
                labels.insert(ch);
                if !slot_of.contains_key(&target) {
                    queue.push_back(target);
                }
            }
        }

        let symbols = SymbolTable::from_sorted_chars(labels)?;
        let mut transitions = Vec::with_capacity(next_slot);
        let mut records = Vec::new();
        for id in order {
            let node = &self.nodes[id as usize];
            records.clear();
            if node.is_final {
                records.push((FINAL_SYM, 0));
            }
            for &(ch, target) in &node.edges {
                let symbol = symbols
                    .symbol(ch)
                    .ok_or_else(|| FsaError::InvalidSymbolTable(format!("unmapped label {ch:?}")))?;
                records.push((symbol, slot_of[&target]));
            }
            if records.is_empty() {
                records.push((DEAD_SYM, 0));
            }
            push_state(&mut transitions, &records);
        }

        Fsa::from_parts(transitions, symbols)
    }

    /// Merge every unchecked node deeper than `down_to` with its registered twin.
    fn minimize(&mut self, down_to: usize) {
        while self.unchecked.len() > down_to {
            let Some((parent, _, child)) = self.unchecked.pop() else {
                break;
            };
            let signature = self.nodes[child as usize].clone();
            let canonical = *self.register.entry(signature).or_insert(child);
            if canonical != child {
                // The child was the parent's most recent edge.
                if let Some(edge) = self.nodes[parent as usize].edges.last_mut() {
                    edge.1 = canonical;
                }
                self.nodes[child as usize] = Node::default();
            }
        }
    }
}
