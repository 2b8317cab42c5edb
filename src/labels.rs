//! Class label numbering and recovery
//!
//! The solver only understands numeric labels. [`LabelIndexer`] hands out a
//! stable positive identifier per distinct class string in first-seen order;
//! [`LabelMap`] is the frozen snapshot a classifier keeps for translating
//! predictions back to strings.

use std::collections::HashMap;
use std::fmt;

/// Assigns 1-based numeric identifiers to class labels in first-seen order.
///
/// The k-th distinct label receives identifier `k as f64`; repeated
/// occurrences always return the previously recorded identifier. There is no
/// removal operation; [`reset`](LabelIndexer::reset) clears everything at
/// the start of a training run. Not synchronized; a training run executes
/// sequentially.
#[derive(Clone, Debug, Default)]
pub struct LabelIndexer {
    ids: HashMap<String, f64>,
    order: Vec<String>,
}

impl LabelIndexer {
    /// Create an empty indexer
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identifier for `label`, assigning the next one if unseen
    pub fn index_of(&mut self, label: &str) -> f64 {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = (self.order.len() + 1) as f64;
        self.ids.insert(label.to_string(), id);
        self.order.push(label.to_string());
        id
    }

    /// Look up a label without assigning a new identifier
    pub fn get(&self, label: &str) -> Option<f64> {
        self.ids.get(label).copied()
    }

    /// Discard all mappings and restart numbering at 1
    pub fn reset(&mut self) {
        self.ids.clear();
        self.order.clear();
    }

    /// Number of distinct labels seen since the last reset
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no labels have been seen
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Capture the current mapping as an immutable [`LabelMap`]
    pub fn snapshot(&self) -> LabelMap {
        LabelMap::from_labels(self.order.clone())
    }
}

/// Immutable label mapping captured at training completion.
///
/// Supports forward lookup (class string to identifier), reverse lookup
/// (identifier to class string, used at prediction time), and iteration in
/// insertion order. Never mutated after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelMap {
    order: Vec<String>,
    ids: HashMap<String, f64>,
}

impl LabelMap {
    /// Build a map from labels listed in insertion order; the k-th entry
    /// (0-based position k-1) receives identifier k.
    pub fn from_labels(order: Vec<String>) -> Self {
        let ids = order
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), (i + 1) as f64))
            .collect();
        Self { order, ids }
    }

    /// Identifier assigned to `label`, if any
    pub fn id_of(&self, label: &str) -> Option<f64> {
        self.ids.get(label).copied()
    }

    /// Class string for a numeric identifier, if it maps to one.
    ///
    /// Only exact integral identifiers in `1..=len` resolve; anything else
    /// (including values a regression-mode model might produce) is `None`.
    pub fn label_of(&self, id: f64) -> Option<&str> {
        if id < 1.0 || id.fract() != 0.0 {
            return None;
        }
        self.order.get(id as usize - 1).map(String::as_str)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Labels in insertion order
    pub fn labels(&self) -> &[String] {
        &self.order
    }

    /// Iterate over (label, identifier) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), (i + 1) as f64))
    }
}

impl fmt::Display for LabelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, id)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label:?} -> {id}")?;
        }
        write!(f, "}}")
    }
}
