use serde::{Deserialize, Serialize};

use crate::domain::GuestCount;

/// Wire body of an RSVP submission. The intake endpoint expects camelCase
/// keys; `name` and `message` are trimmed before this is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpPayload {
    pub name: String,
    pub attendance: String,
    pub guest_count: GuestCount,
    pub message: String,
}
