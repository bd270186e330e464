//! The public key-value store over one parsed properties source.

use crate::coerce;
use crate::document::PropertyDocument;
use crate::error::{ParseResult, PropertiesError};
use crate::events::{FunctionListener, Listener, ListenerSet, PropertyEvent};
use crate::parser::PropertiesParser;
use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key-value store over one properties source.
///
/// The flat map answers lookups; the document keeps the layout. Every
/// mutation is applied to both, in call order, before listeners run. The
/// store is single-threaded and performs no internal locking; callers must
/// order mutations and renders themselves.
pub struct Properties {
    /// Flat key to value projection of the document.
    values: HashMap<String, String>,

    /// Layout model, kept in sync with `values`.
    document: PropertyDocument,

    /// Change listeners, called synchronously after each mutation.
    listeners: ListenerSet,

    /// Path of the loaded source, used by [`Properties::save`].
    source_path: Option<PathBuf>,
}

impl Properties {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            document: PropertyDocument::new(),
            listeners: ListenerSet::new(),
            source_path: None,
        }
    }

    /// Load a properties file, replacing any previously parsed content.
    ///
    /// A missing file surfaces as [`PropertiesError::SourceNotFound`] before
    /// any parsing happens; no partial state is produced.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ParseResult<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PropertiesError::source_not_found(path.display().to_string())
            } else {
                PropertiesError::io(path.display().to_string(), e.to_string())
            }
        })?;

        self.parse_bytes(&bytes);
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Parse a source string, replacing any previously parsed content.
    pub fn parse(&mut self, input: &str) {
        self.parse_bytes(input.as_bytes());
    }

    /// Parse raw source bytes, replacing any previously parsed content.
    pub fn parse_bytes(&mut self, input: &[u8]) {
        self.document = PropertiesParser::parse(input);
        self.values = self.document.to_map();
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_required(&self, key: &str) -> ParseResult<&str> {
        self.get(key)
            .ok_or_else(|| PropertiesError::key_not_found(key))
    }

    /// Get a value coerced to an integer (decimal or hex)
    pub fn get_int(&self, key: &str) -> ParseResult<i64> {
        coerce::parse_int(self.get_required(key)?)
    }

    /// Get a value coerced to a float
    pub fn get_float(&self, key: &str) -> ParseResult<f64> {
        coerce::parse_float(self.get_required(key)?)
    }

    /// Get a value coerced to a boolean
    pub fn get_bool(&self, key: &str) -> ParseResult<bool> {
        coerce::parse_bool(self.get_required(key)?)
    }

    /// Get a comma-separated value as a list of trimmed elements
    pub fn get_list(&self, key: &str) -> ParseResult<Vec<String>> {
        Ok(coerce::parse_list(self.get_required(key)?))
    }

    /// Set a value, adding the key if absent.
    ///
    /// An existing key keeps its line in place (a multi-line value collapses
    /// to one line); a new key appends a `key = value` line at the end of the
    /// document. Listeners observe the mutation after both representations
    /// agree.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        let previous = self.values.insert(key.clone(), value.clone());
        self.document.update_or_insert(&key, &value);

        let event = match previous {
            Some(old_value) => PropertyEvent::Updated {
                key,
                old_value,
                new_value: value,
            },
            None => PropertyEvent::Added { key, value },
        };
        self.listeners.notify_all(&event);
    }

    /// Remove a key, dropping the document line that carries it.
    ///
    /// Returns the removed value. Removal fires no event; the notification
    /// channel only has added and updated kinds.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.values.remove(key)?;
        self.document.remove(key);
        Some(removed)
    }

    /// Copy every property of `other` into this store, in `other`'s document
    /// order, with the usual added/updated semantics per key.
    pub fn merge(&mut self, other: &Properties) {
        let mut seen = HashSet::new();
        let pairs: Vec<(String, String)> = other
            .document
            .properties()
            .filter(|(key, _)| seen.insert(key.clone()))
            .collect();

        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Merge key/value pairs from any map-like source
    pub fn merge_map<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All keys. Order is unspecified; use [`Properties::document`] for
    /// document-ordered traversal.
    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Iterate the flat map entries. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The layout model behind this store
    pub fn document(&self) -> &PropertyDocument {
        &self.document
    }

    /// Render the document back to text
    pub fn serialize(&self) -> String {
        self.document.serialize()
    }

    /// Write the rendered document back to the path it was loaded from
    pub fn save(&self) -> ParseResult<()> {
        let path = self.source_path.as_ref().ok_or_else(|| {
            PropertiesError::custom("no source path: store was not loaded from a file")
        })?;
        std::fs::write(path, self.serialize())
            .map_err(|e| PropertiesError::io(path.display().to_string(), e.to_string()))
    }

    /// Write the rendered document to an arbitrary path
    pub fn save_as(&self, path: impl AsRef<Path>) -> ParseResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.serialize())
            .map_err(|e| PropertiesError::io(path.display().to_string(), e.to_string()))
    }

    /// Register a change listener
    pub fn on_change<L>(&mut self, listener: L)
    where
        L: Listener + 'static,
    {
        self.listeners.register(listener);
    }

    /// Register a function change listener
    pub fn on_change_fn<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&PropertyEvent) + 'static,
    {
        self.listeners.register(FunctionListener::new(name, callback));
    }

    /// Drop every listener registered under `name`
    pub fn remove_listener(&mut self, name: &str) {
        self.listeners.unregister(name);
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}
