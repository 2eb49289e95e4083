//! Local filter view
//!
//! Narrows the currently loaded page by a case-insensitive substring match
//! over a fixed set of string fields. It never talks to the server and never
//! mutates the content it is given.

/// Accessor for one searchable field of a record
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// Case-insensitive substring filter over selected fields of `T`
pub struct LocalFilter<T> {
    fields: Vec<(&'static str, FieldAccessor<T>)>,
}

impl<T> Default for LocalFilter<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> Clone for LocalFilter<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> std::fmt::Debug for LocalFilter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalFilter")
            .field("fields", &self.field_names())
            .finish()
    }
}

impl<T> LocalFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a searchable field
    pub fn field(mut self, name: &'static str, accessor: FieldAccessor<T>) -> Self {
        self.fields.push((name, accessor));
        self
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    /// Whether one record matches an already lowercased needle
    fn matches(&self, record: &T, needle: &str) -> bool {
        self.fields.iter().any(|(_, accessor)| {
            accessor(record)
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
        })
    }

    /// Records of `content` matching `term`, in their original order.
    ///
    /// A blank term returns every record. Missing fields compare as the empty
    /// string.
    pub fn apply<'a>(&self, content: &'a [T], term: &str) -> Vec<&'a T> {
        if term.trim().is_empty() {
            return content.iter().collect();
        }

        let needle = term.to_lowercase();
        content
            .iter()
            .filter(|record| self.matches(record, &needle))
            .collect()
    }

    /// Owned variant of [`apply`](Self::apply)
    pub fn apply_cloned(&self, content: &[T], term: &str) -> Vec<T>
    where
        T: Clone,
    {
        self.apply(content, term).into_iter().cloned().collect()
    }
}
