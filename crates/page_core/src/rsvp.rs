//! RSVP form state: guest stepper, attendance presets, payload assembly.

use shared::{
    domain::{AttendanceOption, GuestCount},
    error::DispatchError,
    protocol::RsvpPayload,
};

/// Which localized notice the host should surface after a dispatch attempt.
/// The wording itself belongs to the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitNotice {
    Confirmed,
    Failed,
}

/// The four-field RSVP form.
#[derive(Debug, Clone, Default)]
pub struct RsvpForm {
    pub name: String,
    pub attendance: Option<AttendanceOption>,
    pub guest_count: GuestCount,
    pub message: String,
}

impl RsvpForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stepper "+": unbounded.
    pub fn increment_guests(&mut self) {
        self.guest_count = self.guest_count.increment();
    }

    /// Stepper "−": no-op at zero.
    pub fn decrement_guests(&mut self) {
        self.guest_count = self.guest_count.decrement();
    }

    /// Selecting an attendance option overwrites the guest count with the
    /// option's preset, discarding any manual stepper adjustments.
    pub fn select_attendance(&mut self, option: AttendanceOption) {
        self.guest_count = option.preset_guests;
        self.attendance = Some(option);
    }

    /// Build the wire payload. Name and message are trimmed of surrounding
    /// whitespace; an unselected attendance serializes as an empty value.
    pub fn payload(&self) -> RsvpPayload {
        RsvpPayload {
            name: self.name.trim().to_string(),
            attendance: self
                .attendance
                .as_ref()
                .map(|option| option.value.clone())
                .unwrap_or_default(),
            guest_count: self.guest_count,
            message: self.message.trim().to_string(),
        }
    }

    /// Fold a dispatch outcome back into the form: success clears every
    /// field and resets the count; failure preserves everything so the
    /// visitor can retry manually.
    pub fn apply_outcome(&mut self, outcome: Result<(), DispatchError>) -> SubmitNotice {
        match outcome {
            Ok(()) => {
                self.clear();
                SubmitNotice::Confirmed
            }
            Err(_) => SubmitNotice::Failed,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.attendance = None;
        self.guest_count = GuestCount::ZERO;
        self.message.clear();
    }
}

#[cfg(test)]
#[path = "tests/rsvp_tests.rs"]
mod tests;
