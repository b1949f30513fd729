use crate::domain::value::TrackingId;

/// Successful gateway answer to a send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    pub success: bool,
    /// Ids in the order the gateway listed them, one per destination.
    pub tracking_ids: Vec<TrackingId>,
}
