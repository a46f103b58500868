// Symbol table: char-to-index mapping.

use crate::FsaError;
use crate::transition::DEAD_SYM;
use hashbrown::HashMap;

/// Parsed symbol table of an automaton.
///
/// Symbols are ordered in the binary as:
/// 1. The accepting marker (index 0) -- empty string
/// 2. Single-character symbols, strictly ascending by code point
///
/// Because indices follow code point order, records sorted by symbol index are
/// also sorted by character.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Character of symbol `i + 1`.
    chars: Vec<char>,
    /// Maps a character to its symbol index.
    char_to_symbol: HashMap<char, u16>,
}

impl SymbolTable {
    /// Build a symbol table from characters in strictly ascending order.
    pub fn from_sorted_chars<I>(chars: I) -> Result<Self, FsaError>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = chars.into_iter().collect();
        // Index 0 and DEAD_SYM are reserved.
        if chars.len() >= DEAD_SYM as usize {
            return Err(FsaError::TooManySymbols(chars.len()));
        }
        if chars.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FsaError::InvalidSymbolTable(
                "symbols not strictly ascending".to_string(),
            ));
        }
        let char_to_symbol = chars
            .iter()
            .enumerate()
            .map(|(i, &ch)| (ch, i as u16 + 1))
            .collect();
        Ok(Self {
            chars,
            char_to_symbol,
        })
    }

    /// Look up the symbol index of a character.
    #[inline]
    pub fn symbol(&self, ch: char) -> Option<u16> {
        self.char_to_symbol.get(&ch).copied()
    }

    /// Number of symbols, including the accepting marker.
    pub fn len(&self) -> usize {
        self.chars.len() + 1
    }

    /// Always false: the accepting marker is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append the binary form of this table to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.len() as u16).to_le_bytes());
        out.push(0);
        let mut buf = [0u8; 4];
        for ch in &self.chars {
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            out.push(0);
        }
    }
}

/// Parse the symbol table from binary data starting at `offset` (after the header).
///
/// Returns the parsed symbol table and the byte offset immediately after the symbol
/// table data (before padding). The caller is responsible for aligning this offset
/// to the transition table boundary.
pub fn parse_symbol_table(data: &[u8], offset: usize) -> Result<(SymbolTable, usize), FsaError> {
    if offset + 2 > data.len() {
        return Err(FsaError::TooShort {
            expected: offset + 2,
            actual: data.len(),
        });
    }

    let symbol_count = u16::from_le_bytes([data[offset], data[offset + 1]]);
    if symbol_count == 0 {
        return Err(FsaError::InvalidSymbolTable(
            "missing accepting marker".to_string(),
        ));
    }
    let mut pos = offset + 2;
    let mut chars = Vec::with_capacity(symbol_count as usize - 1);

    for i in 0..symbol_count {
        let str_start = pos;
        while pos < data.len() && data[pos] != 0 {
            pos += 1;
        }
        if pos >= data.len() {
            return Err(FsaError::InvalidSymbolTable(
                "unterminated symbol string".to_string(),
            ));
        }

        let symbol_bytes = &data[str_start..pos];
        pos += 1; // skip NUL terminator

        if i == 0 {
            if !symbol_bytes.is_empty() {
                return Err(FsaError::InvalidSymbolTable(
                    "symbol 0 must be empty".to_string(),
                ));
            }
            continue;
        }

        let symbol_str = std::str::from_utf8(symbol_bytes).map_err(|_| {
            FsaError::InvalidSymbolTable(format!("invalid UTF-8 in symbol {i}"))
        })?;
        let mut it = symbol_str.chars();
        match (it.next(), it.next()) {
            (Some(ch), None) => chars.push(ch),
            _ => {
                return Err(FsaError::InvalidSymbolTable(format!(
                    "symbol {i} is not a single character"
                )));
            }
        }
    }

    let table = SymbolTable::from_sorted_chars(chars)?;
    Ok((table, pos))
}
