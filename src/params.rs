use indexmap::IndexMap;

/// An insertion-ordered multimap of request parameters.
///
/// `set` replaces every value of a key, `add` appends to a repeatable key.
/// Keys encode in the order they were first written and values of a repeated
/// key encode in the order they were added, so the resulting query string is
/// deterministic — tests compare request contents byte-for-byte.
#[derive(Debug, Clone, Default)]
pub struct SolrParams {
    values: IndexMap<String, Vec<String>>,
}

impl SolrParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all values of `name` with the single `value`.
    ///
    /// A key that already exists keeps its original position in the encoding
    /// order; only its values change.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        // IndexMap::insert keeps the position of an existing key.
        self.values.insert(name.into(), vec![value.into()]);
    }

    /// Append `value` to `name`, keeping any values already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value of `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of `name` in the order they were added. Empty when unset.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Flat `(name, value)` pairs in canonical encoding order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str())))
    }

    /// Number of `(name, value)` pairs across all keys.
    pub fn len(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
