//! Catalog header fields
//!
//! The header entry's value is a block of `Name: value` lines, e.g.
//! `MIME-Version: 1.0`. Field order is kept so a header copied into another
//! catalog reads the same.

/// Ordered header fields of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the value of a header entry.
    ///
    /// Each line is split on the first `": "`; a line ending in a bare `:`
    /// is a field with an empty value. Values are kept as written apart from
    /// a literal `\n` left at the end. Lines without a separator are skipped.
    pub fn parse(value: &str) -> Self {
        let mut headers = Self::new();

        for line in value.lines() {
            let line = line.trim_end_matches('\r');
            let line = line.strip_suffix("\\n").unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }

            let field = line
                .split_once(": ")
                .or_else(|| line.strip_suffix(':').map(|name| (name, "")));

            match field {
                Some((name, field_value)) if !name.trim().is_empty() => {
                    headers.insert(name.trim(), field_value)
                }
                _ => tracing::debug!(line = %line, "Skipping malformed header line"),
            }
        }

        headers
    }

    /// Value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set a field, replacing an existing value in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Iterate over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the fields as a header entry value
    pub fn to_value(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{name}: {value}\n"))
            .collect()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}
