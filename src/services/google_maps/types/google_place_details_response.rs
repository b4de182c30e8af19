use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleAddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResult {
    #[serde(default)]
    pub address_components: Vec<GoogleAddressComponent>,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<GooglePlaceDetailsResult>,
}
