//! Line Options

use std::fmt;

use smallvec::SmallVec;

/// Option selection (size, colour, ...) attached to a cart line.
///
/// Pairs are kept sorted by key with unique keys, so two selections compare
/// equal regardless of the order their keys were set in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineOptions {
    pairs: SmallVec<[(String, String); 2]>,
}

impl LineOptions {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`LineOptions::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.pairs.binary_search_by(|(k, _)| k.as_str().cmp(&key)) {
            Ok(idx) => self
                .pairs
                .get_mut(idx)
                .map(|(_, existing)| std::mem::replace(existing, value)),
            Err(idx) => {
                self.pairs.insert(idx, (key, value));
                None
            }
        }
    }

    /// Value selected for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .and_then(|idx| self.pairs.get(idx))
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LineOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = LineOptions::new();

        for (key, value) in iter {
            options.insert(key, value);
        }

        options
    }
}

impl fmt::Display for LineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{key}: {value}")?;
        }

        Ok(())
    }
}
