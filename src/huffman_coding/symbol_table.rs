//! The frequency (letter) table: one entry per distinct symbol, holding its
//! count and, once the tree is built, its codeword.

use rustc_hash::FxHashMap;

/// How a symbol is located in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SymbolLookup {
    /// Linear search over the entries. Cheap for the small alphabets of text.
    #[default]
    Scan,
    /// Hash index kept alongside the entries.
    Hashed,
}

/// A single symbol with its count and codeword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub symbol: char,
    pub count: u64,
    /// Root-to-leaf path, '0' for left and '1' for right. Empty until assigned.
    pub codeword: String,
    /// Input position of the first occurrence. Breaks count ties when sorting.
    pub first_seen: usize,
}

impl SymbolEntry {
    pub fn new(symbol: char, first_seen: usize) -> Self {
        Self {
            symbol,
            count: 1,
            codeword: String::new(),
            first_seen,
        }
    }
}

/// Ordered, symbol-unique collection of `SymbolEntry`.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<SymbolEntry>,
    lookup: SymbolLookup,
    index: FxHashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new(lookup: SymbolLookup) -> Self {
        Self {
            entries: Vec::new(),
            lookup,
            index: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self) -> SymbolLookup {
        self.lookup
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    /// Index of `symbol` in the table, if present.
    pub fn position(&self, symbol: char) -> Option<usize> {
        match self.lookup {
            SymbolLookup::Scan => self.entries.iter().position(|e| e.symbol == symbol),
            SymbolLookup::Hashed => self.index.get(&symbol).copied(),
        }
    }

    pub fn get(&self, symbol: char) -> Option<&SymbolEntry> {
        self.position(symbol).map(|i| &self.entries[i])
    }

    pub fn entry(&self, idx: usize) -> &SymbolEntry {
        &self.entries[idx]
    }

    /// Count of `symbol`, zero if it was never seen.
    pub fn count_of(&self, symbol: char) -> u64 {
        self.get(symbol).map_or(0, |e| e.count)
    }

    /// Sum of all counts, i.e. the number of symbols scanned.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Add one occurrence of `symbol` found at input position `at`.
    pub fn record(&mut self, symbol: char, at: usize) {
        match self.position(symbol) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.count += 1;
                entry.first_seen = entry.first_seen.min(at);
            }
            None => self.push(SymbolEntry::new(symbol, at)),
        }
    }

    /// Fold another table into this one. Symbols new to `self` are appended in
    /// the order `other` holds them.
    pub fn merge(&mut self, other: FrequencyTable) {
        for theirs in other.entries {
            match self.position(theirs.symbol) {
                Some(i) => {
                    let ours = &mut self.entries[i];
                    ours.count += theirs.count;
                    ours.first_seen = ours.first_seen.min(theirs.first_seen);
                }
                None => self.push(theirs),
            }
        }
    }

    /// Sort ascending by count. Equal counts keep input order of first
    /// occurrence, whichever chunk happened to insert them first.
    pub fn sort_by_count(&mut self) {
        self.entries.sort_by_key(|e| (e.count, e.first_seen));
        self.reindex();
    }

    pub fn set_codeword(&mut self, idx: usize, codeword: String) {
        self.entries[idx].codeword = codeword;
    }

    pub fn clear_codewords(&mut self) {
        self.entries.iter_mut().for_each(|e| e.codeword.clear());
    }

    fn push(&mut self, entry: SymbolEntry) {
        if self.lookup == SymbolLookup::Hashed {
            self.index.insert(entry.symbol, self.entries.len());
        }
        self.entries.push(entry);
    }

    fn reindex(&mut self) {
        if self.lookup == SymbolLookup::Hashed {
            self.index.clear();
            for (i, e) in self.entries.iter().enumerate() {
                self.index.insert(e.symbol, i);
            }
        }
    }
}
