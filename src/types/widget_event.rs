use super::normalized_address::NormalizedAddress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStage {
    Predictions,
    Details,
}

/// Events the widget core emits to its host. `PlaceChanged` fires at most
/// once per successful selection and carries the full accumulated output map.
/// `RequestFailed` is a side-channel for failed external calls; the
/// host-facing contract stays silent on failure, so hosts may ignore it.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    PlaceChanged(NormalizedAddress),
    RequestFailed { stage: RequestStage, status: String },
}
