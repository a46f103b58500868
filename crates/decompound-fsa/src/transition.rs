// Transition records for zero-copy access to the binary transition table.

use bytemuck::{Pod, Zeroable};

/// Transition record (8 bytes).
///
/// - `symbol` (u16): input symbol index
/// - `_reserved` (u16): zero
/// - `trans_info` (u32): packed bitfield containing target_state (bits 0-23)
///   and more_transitions (bits 24-31)
///
/// The first record of a state is its head; `more_transitions` of the head
/// gives the number of records that follow it within the state.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Transition {
    pub symbol: u16,
    pub _reserved: u16,
    pub trans_info: u32,
}

/// Symbol of the record that marks an accepting state. Always the state head.
pub const FINAL_SYM: u16 = 0;

/// Symbol of the single record of a state with no transitions that is not accepting.
pub const DEAD_SYM: u16 = 0xFFFF;

/// `more_transitions` value announcing an overflow cell in the next slot.
pub const OVERFLOW_MORE: u8 = 255;

/// Largest target slot representable in 24 bits.
pub const MAX_TARGET: u32 = 0x00FF_FFFF;

impl Transition {
    pub fn new(symbol: u16, target: u32, more: u8) -> Self {
        Self {
            symbol,
            _reserved: 0,
            trans_info: (target & MAX_TARGET) | ((more as u32) << 24),
        }
    }

    /// Extract the target state slot from the packed field (bits 0-23).
    #[inline]
    pub fn target_state(&self) -> u32 {
        self.trans_info & MAX_TARGET
    }

    /// Extract the more_transitions count from the packed field (bits 24-31).
    #[inline]
    pub fn more_transitions(&self) -> u8 {
        (self.trans_info >> 24) as u8
    }
}

/// Overflow cell (8 bytes).
///
/// When the head's `more_transitions == 255`, the next slot is an overflow cell
/// holding the number of records that follow the cell.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct OverflowCell {
    pub more_transitions: u32,
    pub _padding: u32,
}

/// Location of one state's records within the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSpan {
    /// Slot of the head record.
    pub head: usize,
    /// First slot after the head (and after the overflow cell, if any).
    pub tail_start: usize,
    /// One past the last slot of the state.
    pub end: usize,
}

/// Compute where the records of the state at `slot` live.
///
/// Returns `None` if the state would extend past the end of the table.
#[inline]
pub fn state_span(transitions: &[Transition], slot: usize) -> Option<StateSpan> {
    let head = transitions.get(slot)?;
    let more = head.more_transitions();
    let (tail_start, count) = if more == OVERFLOW_MORE {
        let cell = transitions.get(slot + 1)?;
        let oc: OverflowCell = bytemuck::cast(*cell);
        (slot + 2, oc.more_transitions as usize)
    } else {
        (slot + 1, more as usize)
    };
    let end = tail_start + count;
    if end > transitions.len() {
        return None;
    }
    Some(StateSpan {
        head: slot,
        tail_start,
        end,
    })
}

/// Append the records of one state: `records` must be non-empty and sorted by symbol.
pub fn push_state(out: &mut Vec<Transition>, records: &[(u16, u32)]) {
    let Some((&(symbol, target), rest)) = records.split_first() else {
        return;
    };
    if rest.len() < OVERFLOW_MORE as usize {
        out.push(Transition::new(symbol, target, rest.len() as u8));
    } else {
        out.push(Transition::new(symbol, target, OVERFLOW_MORE));
        out.push(bytemuck::cast(OverflowCell {
            more_transitions: rest.len() as u32,
            _padding: 0,
        }));
    }
    out.extend(rest.iter().map(|&(s, t)| Transition::new(s, t, 0)));
}

/// Number of slots `push_state` uses for a state with `record_count` records.
pub fn state_slots(record_count: usize) -> usize {
    match record_count {
        0 => 0,
        n if n - 1 < OVERFLOW_MORE as usize => n,
        n => n + 1,
    }
}

// Static assertions for struct sizes
const _: () = assert!(size_of::<Transition>() == 8);
const _: () = assert!(size_of::<OverflowCell>() == 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sizes() {
        assert_eq!(size_of::<Transition>(), 8);
        assert_eq!(size_of::<OverflowCell>(), 8);
    }

    #[test]
    fn transition_field_extraction() {
        let t = Transition {
            symbol: 5,
            _reserved: 0,
            // target_state=0x123456 (bits 0-23), more_transitions=0xAB (bits 24-31)
            trans_info: 0xAB_123456,
        };
        assert_eq!(t.target_state(), 0x123456);
        assert_eq!(t.more_transitions(), 0xAB);
        assert_eq!(Transition::new(5, 0x123456, 0xAB), t);
    }

    #[test]
    fn zero_copy_cast() {
        let raw: [u8; 16] = [
            0x01, 0x00, // symbol = 1
            0x00, 0x00, // reserved
            0x03, 0x00, 0x00, 0x00, // trans_info: target=3, more=0
            0x04, 0x00, // symbol = 4
            0x00, 0x00, // reserved
            0x06, 0x00, 0x00, 0x01, // trans_info: target=6, more=1
        ];
        let transitions: &[Transition] = bytemuck::cast_slice(&raw);
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].symbol, 1);
        assert_eq!(transitions[0].target_state(), 3);
        assert_eq!(transitions[1].symbol, 4);
        assert_eq!(transitions[1].target_state(), 6);
        assert_eq!(transitions[1].more_transitions(), 1);
    }

    #[test]
    fn span_of_simple_state() {
        let mut table = Vec::new();
        push_state(&mut table, &[(1, 0), (2, 0), (3, 0)]);
        let span = state_span(&table, 0).unwrap();
        assert_eq!(span.tail_start, 1);
        assert_eq!(span.end, 3);
        assert_eq!(state_slots(3), table.len());
    }

    #[test]
    fn span_with_overflow_cell() {
        let records: Vec<(u16, u32)> = (1..=300).map(|s| (s as u16, 0)).collect();
        let mut table = Vec::new();
        push_state(&mut table, &records);
        assert_eq!(table.len(), 301);
        assert_eq!(state_slots(300), 301);

        let span = state_span(&table, 0).unwrap();
        assert_eq!(span.tail_start, 2);
        assert_eq!(span.end, 301);
        assert_eq!(table[span.tail_start].symbol, 2);
    }

    #[test]
    fn truncated_state_has_no_span() {
        let mut table = Vec::new();
        push_state(&mut table, &[(1, 0), (2, 0), (3, 0)]);
        table.truncate(2);
        assert_eq!(state_span(&table, 0), None);
        assert_eq!(state_span(&table, 5), None);
    }
}
