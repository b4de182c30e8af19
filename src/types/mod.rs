pub mod address_component;
pub mod normalized_address;
pub mod prediction;
pub mod session_token;
pub mod widget_config;
pub mod widget_event;
