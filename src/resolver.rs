use std::sync::Arc;

use tracing::error;

use crate::classifier::classify;
use crate::services::capabilities::{DetailsRequest, PlaceDetailsService, ADDRESS_COMPONENT_FIELD};
use crate::types::normalized_address::NormalizedAddress;
use crate::types::prediction::Prediction;

/// Resolves a chosen prediction into a normalized address: one details fetch
/// restricted to address components, piped through the classifier. A non-OK
/// status abandons the resolution; the failure is logged and handed back as
/// the bare status string, nothing escapes further.
pub struct SelectionResolver {
    details_service: Arc<dyn PlaceDetailsService>,
    identifier: String,
}

impl SelectionResolver {
    pub fn new(details_service: Arc<dyn PlaceDetailsService>, identifier: &str) -> Self {
        SelectionResolver {
            details_service,
            identifier: identifier.to_string(),
        }
    }

    pub async fn resolve(&self, prediction: &Prediction) -> Result<NormalizedAddress, String> {
        let response = self
            .details_service
            .get_details(DetailsRequest {
                place_id: prediction.place_id.clone(),
                fields: vec![ADDRESS_COMPONENT_FIELD.to_string()],
            })
            .await;

        if !response.is_ok() {
            error!(
                "Place details fetch for {} failed with status {}",
                prediction.place_id, response.status
            );
            return Err(response.status);
        }

        Ok(classify(&response.payload, &self.identifier))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::services::capabilities::ServiceResponse;
    use crate::types::address_component::RawAddressComponent;
    use crate::types::normalized_address::{FIELD_CITY, FIELD_STREET};

    struct ScriptedDetails {
        status: String,
        components: Vec<RawAddressComponent>,
    }

    #[async_trait]
    impl PlaceDetailsService for ScriptedDetails {
        async fn get_details(
            &self,
            request: DetailsRequest,
        ) -> ServiceResponse<Vec<RawAddressComponent>> {
            assert_eq!(request.fields, vec![ADDRESS_COMPONENT_FIELD.to_string()]);
            ServiceResponse {
                status: self.status.clone(),
                payload: self.components.clone(),
            }
        }
    }

    fn prediction() -> Prediction {
        Prediction {
            id: "1".to_string(),
            place_id: "place-1".to_string(),
            description: "42 Main Street".to_string(),
        }
    }

    #[tokio::test]
    async fn classifies_components_on_ok() {
        let resolver = SelectionResolver::new(
            Arc::new(ScriptedDetails {
                status: "OK".to_string(),
                components: vec![
                    RawAddressComponent {
                        short_name: "42".to_string(),
                        long_name: "42".to_string(),
                        types: vec!["street_number".to_string()],
                    },
                    RawAddressComponent {
                        short_name: "Main St".to_string(),
                        long_name: "Main Street".to_string(),
                        types: vec!["route".to_string()],
                    },
                    RawAddressComponent {
                        short_name: "Springfield".to_string(),
                        long_name: "Springfield".to_string(),
                        types: vec!["locality".to_string()],
                    },
                ],
            }),
            "home",
        );

        let address = resolver.resolve(&prediction()).await.unwrap();

        assert_eq!(address.field("home", FIELD_STREET), Some("42 Main Street"));
        assert_eq!(address.field("home", FIELD_CITY), Some("Springfield"));
        assert_eq!(address.len(), 4);
    }

    #[tokio::test]
    async fn abandons_resolution_on_failure_status() {
        let resolver = SelectionResolver::new(
            Arc::new(ScriptedDetails {
                status: "NOT_FOUND".to_string(),
                components: vec![],
            }),
            "home",
        );

        assert_eq!(
            resolver.resolve(&prediction()).await,
            Err("NOT_FOUND".to_string())
        );
    }
}
