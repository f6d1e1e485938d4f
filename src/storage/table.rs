use std::collections::{BTreeMap, HashMap};

/// Insertion-ordered in-memory table keyed by a string identifier.
///
/// Rows live in a `BTreeMap` keyed by a monotonically increasing row id so
/// scans come back in creation order; `index` maps the public identifier to
/// that row id.
#[derive(Debug, Clone)]
pub struct EntityTable<T> {
    rows: BTreeMap<usize, T>,
    index: HashMap<String, usize>,
    next_row_id: usize,
}

impl<T> EntityTable<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            index: HashMap::new(),
            next_row_id: 0,
        }
    }

    /// Inserts a row under `key`. An existing row with the same key is
    /// replaced in place and keeps its scan position.
    pub fn insert(&mut self, key: impl Into<String>, row: T) {
        let key = key.into();
        if let Some(row_id) = self.index.get(&key) {
            self.rows.insert(*row_id, row);
            return;
        }

        let row_id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.insert(row_id, row);
        self.index.insert(key, row_id);
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).and_then(|row_id| self.rows.get(row_id))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let row_id = self.index.get(key)?;
        self.rows.get_mut(row_id)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Rows in insertion order.
    pub fn scan(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
