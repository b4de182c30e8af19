use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleAutocompleteResponsePrediction {
    pub place_id: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleAutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<GoogleAutocompleteResponsePrediction>,
}
