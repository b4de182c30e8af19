use async_trait::async_trait;

use crate::types::address_component::RawAddressComponent;
use crate::types::prediction::Prediction;
use crate::types::session_token::SessionToken;

/// The status value both services use to signal success. Anything else is a
/// failure; the boundary defines no structured error payload.
pub const STATUS_OK: &str = "OK";

/// Type filter fixed by the widget: predictions are street addresses only.
pub const ADDRESS_TYPE_FILTER: &str = "address";

/// The only details field the widget ever requests.
pub const ADDRESS_COMPONENT_FIELD: &str = "address_component";

pub struct PredictionRequest {
    pub input: String,
    pub country: Option<String>,
    pub session_token: SessionToken,
    pub types: Vec<String>,
}

pub struct DetailsRequest {
    pub place_id: String,
    pub fields: Vec<String>,
}

/// Status-string envelope mirroring the external services' callback
/// contract. On a non-OK status the payload is empty and must be ignored.
pub struct ServiceResponse<T> {
    pub status: String,
    pub payload: T,
}

impl<T> ServiceResponse<T> {
    pub fn ok(payload: T) -> Self {
        ServiceResponse {
            status: STATUS_OK.to_string(),
            payload,
        }
    }

    pub fn failed(status: impl Into<String>) -> Self
    where
        T: Default,
    {
        ServiceResponse {
            status: status.into(),
            payload: T::default(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Place-prediction capability: free text in, ranked candidate places out.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn get_place_predictions(
        &self,
        request: PredictionRequest,
    ) -> ServiceResponse<Vec<Prediction>>;
}

/// Place-details capability: resolves an opaque place handle into its typed
/// address components.
#[async_trait]
pub trait PlaceDetailsService: Send + Sync {
    async fn get_details(&self, request: DetailsRequest)
        -> ServiceResponse<Vec<RawAddressComponent>>;
}
