pub mod classifier;
pub mod controller;
pub mod debounce;
pub mod resolver;
pub mod services;
pub mod types;

pub use classifier::classify;
pub use controller::{AutocompleteController, Phase};
pub use types::address_component::RawAddressComponent;
pub use types::normalized_address::NormalizedAddress;
pub use types::prediction::Prediction;
pub use types::widget_config::WidgetConfig;
pub use types::widget_event::WidgetEvent;
