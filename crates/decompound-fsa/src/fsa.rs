// Automaton loading, validation and traversal.

use crate::format::{self, HEADER_SIZE};
use crate::symbols::{self, SymbolTable};
use crate::transition::{DEAD_SYM, FINAL_SYM, Transition, state_span};
use crate::{FsaBuilder, FsaError, State};

/// Acyclic deterministic automaton over Unicode scalar values.
///
/// Immutable once loaded or built; all queries take `&self` and have no side
/// effects, so one instance can be shared between threads.
#[derive(Clone)]
pub struct Fsa {
    /// The transition table, copied into an owned, aligned buffer.
    transitions: Vec<Transition>,
    /// Symbol table.
    symbols: SymbolTable,
    /// Number of states (heads) in the table.
    state_count: usize,
}

impl std::fmt::Debug for Fsa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fsa")
            .field("slot_count", &self.transitions.len())
            .field("state_count", &self.state_count)
            .field("symbol_count", &self.symbols.len())
            .finish()
    }
}

impl Fsa {
    /// Load an automaton from its binary form.
    ///
    /// The transition table is copied into an owned `Vec<Transition>` for
    /// alignment safety (the source `&[u8]` may not be 8-byte aligned) and then
    /// validated completely, so traversal never indexes out of bounds.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FsaError> {
        format::parse_header(data)?;
        let (symbols, sym_end) = symbols::parse_symbol_table(data, HEADER_SIZE)?;

        // Align to 8-byte boundary (sizeof(Transition))
        let partial = sym_end % 8;
        let transition_offset = if partial > 0 { sym_end + (8 - partial) } else { sym_end };

        if transition_offset > data.len() {
            return Err(FsaError::TooShort {
                expected: transition_offset,
                actual: data.len(),
            });
        }

        let remaining = &data[transition_offset..];
        let transition_count = remaining.len() / size_of::<Transition>();

        if transition_count == 0 {
            return Err(FsaError::TooShort {
                expected: transition_offset + size_of::<Transition>(),
                actual: data.len(),
            });
        }
        if remaining.len() % size_of::<Transition>() != 0 {
            return Err(FsaError::TooShort {
                expected: transition_offset + remaining.len().next_multiple_of(8),
                actual: data.len(),
            });
        }

        let mut transitions = vec![Transition::new(0, 0, 0); transition_count];
        let dst_bytes = bytemuck::cast_slice_mut::<Transition, u8>(&mut transitions);
        dst_bytes.copy_from_slice(remaining);

        Self::from_parts(transitions, symbols)
    }

    /// Build an automaton from strings in ascending code point order.
    ///
    /// Exact duplicates are ignored; any other ordering violation is an error.
    pub fn from_sorted<I, S>(entries: I) -> Result<Self, FsaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = FsaBuilder::new();
        for entry in entries {
            builder.add(entry.as_ref())?;
        }
        builder.finish()
    }

    /// Validate a transition table against its symbol table.
    pub(crate) fn from_parts(
        transitions: Vec<Transition>,
        symbols: SymbolTable,
    ) -> Result<Self, FsaError> {
        let state_count = validate(&transitions, &symbols)?;
        Ok(Self {
            transitions,
            symbols,
            state_count,
        })
    }

    /// Serialize to the binary artifact format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            HEADER_SIZE + 8 * self.symbols.len() + self.transitions.len() * size_of::<Transition>(),
        );
        format::write_header(&mut out);
        self.symbols.write(&mut out);
        let padded = out.len().next_multiple_of(8);
        out.resize(padded, 0);
        out.extend_from_slice(bytemuck::cast_slice(&self.transitions));
        out
    }

    /// The initial state.
    #[inline]
    pub fn root(&self) -> State {
        State(0)
    }

    /// Follow the transition labelled `ch` out of `state`.
    ///
    /// Characters outside the symbol table have no transitions.
    #[inline]
    pub fn transition(&self, state: State, ch: char) -> Option<State> {
        let symbol = self.symbols.symbol(ch)?;
        let slot = state.0 as usize;
        let span = state_span(&self.transitions, slot)?;
        let head = &self.transitions[span.head];
        if head.symbol == symbol {
            return Some(State(head.target_state()));
        }
        let tail = &self.transitions[span.tail_start..span.end];
        tail.binary_search_by_key(&symbol, |t| t.symbol)
            .ok()
            .map(|i| State(tail[i].target_state()))
    }

    /// Whether the path leading to `state` spells a complete entry.
    #[inline]
    pub fn is_final(&self, state: State) -> bool {
        self.transitions
            .get(state.0 as usize)
            .is_some_and(|head| head.symbol == FINAL_SYM)
    }

    /// Walk `input` from the root; returns the reached state, if any.
    pub fn walk(&self, input: &str) -> Option<State> {
        input
            .chars()
            .try_fold(self.root(), |state, ch| self.transition(state, ch))
    }

    /// Whether `entry` was one of the strings the automaton was built from.
    pub fn contains(&self, entry: &str) -> bool {
        self.walk(entry).is_some_and(|state| self.is_final(state))
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Number of symbols, the accept marker included.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of slots in the transition table.
    pub fn slot_count(&self) -> usize {
        self.transitions.len()
    }
}

/// Walk every state of the table, checking record bounds, symbol ranges and
/// ordering, and that every target is the head of a state.
///
/// Returns the number of states.
fn validate(transitions: &[Transition], symbols: &SymbolTable) -> Result<usize, FsaError> {
    let symbol_count = symbols.len();
    let mut is_head = vec![false; transitions.len()];
    let mut targets = Vec::new();
    let mut slot = 0;
    let mut state_count = 0;

    while slot < transitions.len() {
        let span = state_span(transitions, slot).ok_or(FsaError::InvalidTransition {
            slot,
            reason: "state extends past end of table",
        })?;
        is_head[slot] = true;
        state_count += 1;

        let head = &transitions[slot];
        match head.symbol {
            DEAD_SYM if span.end != span.tail_start => {
                return Err(FsaError::InvalidTransition {
                    slot,
                    reason: "dead state with transitions",
                });
            }
            DEAD_SYM | FINAL_SYM => {}
            s if s as usize >= symbol_count => {
                return Err(FsaError::InvalidTransition {
                    slot,
                    reason: "symbol out of range",
                });
            }
            _ => targets.push((slot, head.target_state())),
        }

        let mut previous = head.symbol;
        for (at, t) in transitions.iter().enumerate().take(span.end).skip(span.tail_start) {
            if t.symbol == FINAL_SYM || t.symbol == DEAD_SYM || t.symbol as usize >= symbol_count {
                return Err(FsaError::InvalidTransition {
                    slot: at,
                    reason: "symbol out of range",
                });
            }
            if t.symbol <= previous {
                return Err(FsaError::InvalidTransition {
                    slot: at,
                    reason: "symbols not strictly ascending",
                });
            }
            previous = t.symbol;
            targets.push((at, t.target_state()));
        }
        slot = span.end;
    }

    for (slot, target) in targets {
        if !is_head.get(target as usize).copied().unwrap_or(false) {
            return Err(FsaError::InvalidTransition {
                slot,
                reason: "target is not a state",
            });
        }
    }

    Ok(state_count)
}
