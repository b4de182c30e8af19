use uuid::Uuid;

/// Opaque handle correlating a run of prediction queries with the eventual
/// details fetch, per the prediction service's session-billing contract.
/// Minted once when the service becomes ready and reused for the whole
/// session; never regenerated mid-session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new() -> Self {
        SessionToken(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}
