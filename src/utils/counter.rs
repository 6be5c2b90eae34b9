//! Insertion-ordered frequency counter

use std::collections::HashMap;

/// Counts occurrences of strings, remembering the order they were first seen
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `item`
    pub fn add(&mut self, item: &str) {
        match self.index.get(item) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(item.to_string(), self.entries.len());
                self.entries.push((item.to_string(), 1));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Up to `n` entries by descending count; ties keep first-seen order
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut sorted = self.entries.clone();
        // stable sort keeps first-seen order among equal counts
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(n);
        sorted
    }

    /// Entries seen more than once, in first-seen order
    pub fn repeated(&self) -> Vec<(String, usize)> {
        self.entries.iter().filter(|(_, c)| *c > 1).cloned().collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counter = Self::new();
        for item in iter {
            counter.add(item);
        }
        counter
    }
}
