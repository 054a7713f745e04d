//! Toolchain variable map handed to the external build system

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single toolchain variable value.
///
/// Every emitted variable has a concrete value; there is no null state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Bool(bool),
    String(String),
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for VariableValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for VariableValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// The flat variable map passed verbatim to the external build system.
///
/// Keyed on a BTreeMap so iteration order is deterministic and two maps
/// built from the same inputs compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolchainVariables {
    #[serde(flatten)]
    vars: BTreeMap<String, VariableValue>,
}

impl ToolchainVariables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<VariableValue>) {
        self.vars.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VariableValue> {
        self.vars.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VariableValue)> {
        self.vars.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<'a> IntoIterator for &'a ToolchainVariables {
    type Item = (&'a String, &'a VariableValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, VariableValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
