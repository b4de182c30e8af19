pub enum MapsServiceError {
    Transport(String),
    Decode(String),
}

impl std::fmt::Display for MapsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MapsServiceError::Transport(e) => write!(f, "Transport error: {}", e),
            MapsServiceError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}
