//! Localization lookup against in-memory string tables.

use std::collections::HashMap;

/// Table consulted when no table name is given.
pub const DEFAULT_TABLE: &str = "Localizable";

/// Named translation tables.
///
/// Lookup never fails: a missing key falls back to the supplied default
/// value, and to the key itself when that is empty.
///
/// # Examples
///
/// ```
/// use string_extras::Localizer;
///
/// let localizer = Localizer::new()
///     .with_entry("greeting", "Bonjour")
///     .with_table("Errors", [("not_found", "Introuvable")]);
///
/// assert_eq!(localizer.localize("greeting"), "Bonjour");
/// assert_eq!(localizer.localize_with("not_found", Some("Errors"), ""), "Introuvable");
/// assert_eq!(localizer.localize("missing"), "missing");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Localizer {
    default_table: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Default for Localizer {
    fn default() -> Self {
        Self {
            default_table: DEFAULT_TABLE.to_string(),
            tables: HashMap::new(),
        }
    }
}

impl Localizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `table` instead of [`DEFAULT_TABLE`] when no table is named.
    #[must_use]
    pub fn with_default_table(mut self, table: impl Into<String>) -> Self {
        self.default_table = table.into();
        self
    }

    /// Add an entry to the default table.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let table = self.default_table.clone();
        self.insert(&table, key, value);
        self
    }

    /// Add (or extend) a named table.
    #[must_use]
    pub fn with_table<K, V>(
        mut self,
        table: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.tables.entry(table.into()).or_default();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
        self
    }

    /// Insert one entry, replacing any previous translation.
    pub fn insert(&mut self, table: &str, key: impl Into<String>, value: impl Into<String>) {
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    #[must_use]
    pub fn default_table(&self) -> &str {
        &self.default_table
    }

    /// Translation of `key` from the default table, or `key` itself.
    #[must_use]
    pub fn localize(&self, key: &str) -> String {
        self.localize_with(key, None, "")
    }

    /// Translation of `key` from `table` (default table when `None`).
    ///
    /// Falls back to `value` when the key is missing, or to `key` when
    /// `value` is empty.
    #[must_use]
    pub fn localize_with(&self, key: &str, table: Option<&str>, value: &str) -> String {
        let table = table.unwrap_or(&self.default_table);
        if let Some(found) = self.tables.get(table).and_then(|t| t.get(key)) {
            return found.clone();
        }
        if value.is_empty() {
            key.to_string()
        } else {
            value.to_string()
        }
    }
}
