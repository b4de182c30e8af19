use serde::{Deserialize, Serialize};

/// One typed fragment of a geocoded address, as returned by the place
/// details service for a resolved selection. `types` is non-empty and a
/// component may carry several tags at once (e.g. `locality` + `political`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawAddressComponent {
    pub short_name: String,
    pub long_name: String,
    pub types: Vec<String>,
}

impl RawAddressComponent {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}
