//! Commands queued from the UI to the submission worker.

use shared::protocol::RsvpPayload;

pub enum BackendCommand {
    SubmitRsvp { payload: RsvpPayload },
}
