//! Output formats, looked up by the name given on the command line or in the config file.

use crate::kensa::tree::TreeNode;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Renders a parsed tree as text.
pub trait Formatter: Send + Sync {
    /// Lookup key, e.g. `json`.
    fn name(&self) -> &str;

    /// One line shown by `kensa list-formats`.
    fn description(&self) -> &str;

    fn serialize(&self, tree: &TreeNode) -> Result<String, FormatError>;
}

/// Formatters keyed by name, iterated in name order.
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// The json, treeviz and yaml formatters.
    pub fn with_defaults() -> Self {
        let mut registry = FormatRegistry::default();
        registry.register(super::JsonFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Adds a formatter, replacing any registered under the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        self.formatters.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(Box::as_ref)
    }

    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.values().map(Box::as_ref)
    }

    pub fn serialize(&self, tree: &TreeNode, format: &str) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize(tree),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }
}
