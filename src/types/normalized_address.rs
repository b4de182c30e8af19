use std::collections::HashMap;

use serde::Serialize;

pub const FIELD_STREET: &str = "street";
pub const FIELD_CITY: &str = "city";
pub const FIELD_STATE: &str = "state";
pub const FIELD_POSTCODE: &str = "postcode";

/// Normalized output of a resolved place: a map from `${prefix}_street`,
/// `${prefix}_city`, `${prefix}_state` and `${prefix}_postcode` to strings.
/// An empty string is the explicit "not found" value; classification always
/// produces all four keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedAddress {
    fields: HashMap<String, String>,
}

pub fn field_key(prefix: &str, field: &str) -> String {
    format!("{}_{}", prefix, field)
}

impl NormalizedAddress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.as_str())
    }

    pub fn field(&self, prefix: &str, field: &str) -> Option<&str> {
        self.fields.get(&field_key(prefix, field)).map(|v| v.as_str())
    }

    /// Overlays `other` onto this map, key by key. The controller uses this
    /// to accumulate output across selections.
    pub fn merge(&mut self, other: NormalizedAddress) {
        self.fields.extend(other.fields);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.fields.iter()
    }
}
