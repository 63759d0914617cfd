//! `key:value` template parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Split `key:value` on the first colon.
///
/// Fails when there is no colon or nothing follows it. The value may itself
/// contain colons.
pub fn parse_pair(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((key, value)) if !value.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(ScaffoldError::InvalidParam {
            raw: raw.to_string(),
        }),
    }
}

/// Parameters handed to a template when it is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, String>);

impl TemplateParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Overlay `other` on top of `self`; `other` wins on shared keys.
    pub fn merge(&mut self, other: &TemplateParams) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for TemplateParams {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for TemplateParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
