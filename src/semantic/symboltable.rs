use crate::ast::StorageKind;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub storage: String,
    pub kind: StorageKind,
    pub line_number: usize,
}

impl Symbol {
    pub fn new(storage: impl Into<String>, kind: StorageKind, line_number: usize) -> Self {
        Self {
            storage: storage.into(),
            kind,
            line_number,
        }
    }
}

/// Flat, global-only mapping from source identifier to storage location.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: HashMap::new(),
        }
    }

    /// Records `name`; a redeclaration replaces the previous entry.
    pub fn insert(&mut self, name: &str, symbol: Symbol) -> Option<Symbol> {
        let previous = self.symbols.insert(name.to_string(), symbol);
        if let Some(old) = &previous {
            debug!(name, previous_line = old.line_number, "symbol redeclared");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(|s| s.storage.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    // Returns symbols sorted by name so listings are stable.
    pub fn all_symbols(&self) -> Vec<(&str, &Symbol)> {
        let mut all: Vec<(&str, &Symbol)> = self.symbols.iter().map(|(k, v)| (k.as_str(), v)).collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all
    }

    pub fn print_symbols(&self) {
        println!("{:-<60}", "");
        println!("| {:<15} | {:<20} | {:<10} | {:<4} |", "Name", "Storage", "Kind", "Line");
        println!("{:-<60}", "");
        if self.is_empty() {
            println!("| (empty) {:<49}|", "");
        }
        for (name, symbol) in self.all_symbols() {
            println!(
                "| {:<15} | {:<20} | {:<10} | {:<4} |",
                name,
                symbol.storage,
                symbol.kind.keyword(),
                symbol.line_number
            );
        }
        println!("{:-<60}", "");
    }
}
