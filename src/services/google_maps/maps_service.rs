use async_trait::async_trait;
use tracing::error;
use urlencoding::encode;

use super::types::{
    google_autocomplete_response::GoogleAutocompleteResponse,
    google_place_details_response::GooglePlaceDetailsResponse,
    maps_service_error::MapsServiceError,
};
use crate::services::capabilities::{
    DetailsRequest, PlaceDetailsService, PredictionRequest, PredictionService, ServiceResponse,
    STATUS_OK,
};
use crate::types::address_component::RawAddressComponent;
use crate::types::prediction::Prediction;

/// Status reported to the caller when the HTTP round trip itself fails, so
/// the trait boundary stays status-string-only.
const STATUS_TRANSPORT_ERROR: &str = "UNKNOWN_ERROR";

#[derive(Clone)]
pub struct GoogleMapsConfig {
    pub api_key: String,
    pub host: String,
}

/// HTTP client for the Google Places autocomplete and details web endpoints,
/// implementing both widget capabilities.
#[derive(Clone)]
pub struct GoogleMapsService {
    config: GoogleMapsConfig,
    client: reqwest::Client,
}

impl GoogleMapsService {
    pub fn new(config: GoogleMapsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_predictions(
        &self,
        request: &PredictionRequest,
    ) -> Result<GoogleAutocompleteResponse, MapsServiceError> {
        let mut url = format!(
            "{}/maps/api/place/autocomplete/json?input={}&types={}&sessiontoken={}&key={}",
            self.config.host,
            encode(&request.input),
            encode(&request.types.join("|")),
            encode(request.session_token.as_str()),
            self.config.api_key
        );

        if let Some(country) = &request.country {
            url.push_str(&format!("&components=country:{}", encode(country)));
        }

        let resp =
            self.client.get(&url).send().await.map_err(|e| {
                MapsServiceError::Transport(format!("Failed to send request: {}", e))
            })?;

        resp.json::<GoogleAutocompleteResponse>().await.map_err(|e| {
            MapsServiceError::Decode(format!("Failed to get response body: {}", e))
        })
    }

    async fn fetch_details(
        &self,
        request: &DetailsRequest,
    ) -> Result<GooglePlaceDetailsResponse, MapsServiceError> {
        let url = format!(
            "{}/maps/api/place/details/json?place_id={}&fields={}&key={}",
            self.config.host,
            encode(&request.place_id),
            encode(&request.fields.join(",")),
            self.config.api_key
        );

        let resp =
            self.client.get(&url).send().await.map_err(|e| {
                MapsServiceError::Transport(format!("Failed to send request: {}", e))
            })?;

        resp.json::<GooglePlaceDetailsResponse>().await.map_err(|e| {
            MapsServiceError::Decode(format!("Failed to get response body: {}", e))
        })
    }
}

#[async_trait]
impl PredictionService for GoogleMapsService {
    async fn get_place_predictions(
        &self,
        request: PredictionRequest,
    ) -> ServiceResponse<Vec<Prediction>> {
        let body = match self.fetch_predictions(&request).await {
            Ok(body) => body,
            Err(e) => {
                error!("Autocomplete request failed: {}", e);
                return ServiceResponse::failed(STATUS_TRANSPORT_ERROR);
            }
        };

        if body.status != STATUS_OK {
            return ServiceResponse::failed(body.status);
        }

        ServiceResponse::ok(
            body.predictions
                .into_iter()
                .map(|p| Prediction {
                    // The web service carries no separate stable id; reuse
                    // the place handle as the list key.
                    id: p.place_id.clone(),
                    place_id: p.place_id,
                    description: p.description,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl PlaceDetailsService for GoogleMapsService {
    async fn get_details(
        &self,
        request: DetailsRequest,
    ) -> ServiceResponse<Vec<RawAddressComponent>> {
        let body = match self.fetch_details(&request).await {
            Ok(body) => body,
            Err(e) => {
                error!("Place details request failed: {}", e);
                return ServiceResponse::failed(STATUS_TRANSPORT_ERROR);
            }
        };

        if body.status != STATUS_OK {
            return ServiceResponse::failed(body.status);
        }

        let components = body
            .result
            .map(|r| r.address_components)
            .unwrap_or_default()
            .into_iter()
            .map(|c| RawAddressComponent {
                short_name: c.short_name,
                long_name: c.long_name,
                types: c.types,
            })
            .collect();

        ServiceResponse::ok(components)
    }
}
