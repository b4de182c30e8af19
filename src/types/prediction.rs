use serde::{Deserialize, Serialize};

/// A single autocomplete suggestion. `id` is the stable key for list
/// rendering, `place_id` the opaque handle used to request details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub place_id: String,
    pub description: String,
}
