//! Variable library types
//!
//! A variable library is a named, server-hosted collection of key/value
//! pairs usable for token substitution. Libraries are immutable once
//! fetched; the fetcher's cache owns them until superseded or evicted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single value record inside a variable library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableValue {
    /// The variable value. The service returns an empty string for secret
    /// variables whose values it withholds.
    #[serde(default)]
    pub value: String,

    /// Whether the service treats this variable as a secret.
    /// Omitted on the wire for plain variables.
    #[serde(default)]
    pub is_secret: bool,

    /// Whether pipelines may override this variable at queue time.
    #[serde(default)]
    pub allow_override: bool,
}

impl VariableValue {
    /// Creates a plain (non-secret, non-overridable) value.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_secret: false,
            allow_override: false,
        }
    }
}

/// A named collection of variables fetched from the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableLibrary {
    /// Numeric identifier, unique within a project.
    pub id: u64,

    /// Display name of the library.
    pub name: String,

    /// Mapping from variable name to its value record.
    #[serde(default)]
    pub variables: BTreeMap<String, VariableValue>,
}

impl VariableLibrary {
    /// Creates a library from an id, a name, and an iterator of
    /// `(key, value)` pairs of plain variables.
    pub fn new<K, V>(
        id: u64,
        name: impl Into<String>,
        variables: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            variables: variables
                .into_iter()
                .map(|(k, v)| (k.into(), VariableValue::plain(v)))
                .collect(),
        }
    }

    /// Looks up the value string for a variable name, matched verbatim
    /// and case-sensitively.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.value.as_str())
    }

    /// Returns the number of variables in this library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if this library holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
