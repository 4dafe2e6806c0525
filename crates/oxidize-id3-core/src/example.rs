use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Id3Error, Id3Result};

/// Categorical attributes of one record: attribute name to attribute value.
///
/// Inserting a name that is already present replaces its value, so duplicate
/// keys resolve to the last write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Attributes(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject malformed entries. An attribute name must be non-empty.
    pub fn validate(&self) -> Id3Result<()> {
        if self.0.contains_key("") {
            return Err(Id3Error::InvalidInput(
                "attribute mapping contains an empty attribute name".into(),
            ));
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A training record: attributes plus a boolean label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub attributes: Attributes,
    pub label: bool,
}

impl LabeledExample {
    pub fn new(attributes: Attributes, label: bool) -> Self {
        LabeledExample { attributes, label }
    }
}

/// Anything that exposes attributes and a label.
///
/// Implemented for `LabeledExample` and for references to any `Record`, so
/// metric and partition functions accept both owned slices and slices of
/// borrowed examples.
pub trait Record {
    fn attributes(&self) -> &Attributes;
    fn label(&self) -> bool;
}

impl Record for LabeledExample {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn label(&self) -> bool {
        self.label
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn attributes(&self) -> &Attributes {
        (**self).attributes()
    }

    fn label(&self) -> bool {
        (**self).label()
    }
}
