use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ElementId);

/// Number of guests attached to an RSVP. Never negative; the stepper
/// saturates at zero and presets overwrite the value wholesale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GuestCount(pub u32);

impl GuestCount {
    pub const ZERO: Self = Self(0);

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

/// One selectable attendance option. The wire value is what the intake
/// endpoint receives; the preset is the guest count the option carries,
/// mirroring the markup's `data-count` convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceOption {
    pub value: String,
    pub preset_guests: GuestCount,
}

impl AttendanceOption {
    pub fn new(value: impl Into<String>, preset_guests: u32) -> Self {
        Self {
            value: value.into(),
            preset_guests: GuestCount(preset_guests),
        }
    }
}
