use super::*;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("at most {max} entries fit on the wheel ({current} already, {incoming} more requested)")]
    CapacityExceeded {
        max: usize,
        current: usize,
        incoming: usize,
    },
}

/// A label on the wheel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed non-blank lines of `input`
pub fn parse_input(input: &str) -> Vec<Entry> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Entry::new)
        .collect()
}

/// Ordered entries, index is the slot on the wheel. Duplicates are allowed.
#[derive(Debug, Clone)]
pub struct EntryList {
    max: usize,
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            entries: Vec::new(),
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Either the whole batch goes in or nothing does.
    pub fn add_batch(&mut self, batch: Vec<Entry>) -> Result<usize, EntryError> {
        if self.entries.len() + batch.len() > self.max {
            return Err(EntryError::CapacityExceeded {
                max: self.max,
                current: self.entries.len(),
                incoming: batch.len(),
            });
        }
        let added = batch.len();
        self.entries.extend(batch);
        Ok(added)
    }

    /// One entry per non-blank line
    pub fn add_from_input(&mut self, input: &str) -> Result<usize, EntryError> {
        let batch = parse_input(input);
        if batch.is_empty() {
            return Ok(0);
        }
        self.add_batch(batch)
    }

    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> EntryList {
        let mut list = EntryList::new(50);
        list.add_batch((0..n).map(|i| Entry::new(format!("#{i}"))).collect())
            .unwrap();
        list
    }

    #[test]
    fn parses_lines() {
        let mut list = EntryList::new(50);
        let added = list.add_from_input("  Alice\n\n  Bob  \r\n   \nAlice\n").unwrap();
        assert_eq!(added, 3);
        let labels: Vec<&str> = list.iter().map(Entry::label).collect();
        assert_eq!(labels, ["Alice", "Bob", "Alice"]);
    }

    #[test]
    fn blank_input_is_noop() {
        let mut list = filled(2);
        assert_eq!(list.add_from_input(" \n\t \n"), Ok(0));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn capacity_boundary() {
        let mut list = filled(49);
        assert_eq!(list.add_batch(vec![Entry::new("last")]), Ok(1));
        assert_eq!(list.len(), 50);
        assert_eq!(
            list.add_batch(vec![Entry::new("one too many")]),
            Err(EntryError::CapacityExceeded {
                max: 50,
                current: 50,
                incoming: 1,
            })
        );
        assert_eq!(list.len(), 50);
    }

    #[test]
    fn oversized_batch_is_not_applied_partially() {
        let mut list = filled(48);
        let result = list.add_from_input("a\nb\nc");
        assert!(matches!(result, Err(EntryError::CapacityExceeded { .. })));
        assert_eq!(list.len(), 48);
        assert_eq!(list.get(47).map(Entry::label), Some("#47"));
    }

    #[test]
    fn remove_keeps_order() {
        let mut list = filled(4);
        assert_eq!(list.remove(1), Some(Entry::new("#1")));
        assert_eq!(list.remove(10), None);
        let labels: Vec<&str> = list.iter().map(Entry::label).collect();
        assert_eq!(labels, ["#0", "#2", "#3"]);
    }
}
