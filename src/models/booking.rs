use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::wire::{opt_string_or_number, string_or_number};

/// `GET /v2/bookings/user/{userId}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookingsResponse {
    #[serde(default)]
    pub rows: Vec<BookingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRow {
    #[serde(default, alias = "bookingId", deserialize_with = "opt_string_or_number")]
    pub booking_id: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub booked_state_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookingRow {
    /// Identifier used by `removeBooking`: the booking id when the row has
    /// one, else the booked state.
    pub fn removal_id(&self) -> &str {
        self.booking_id.as_deref().unwrap_or(&self.booked_state_id)
    }
}

/// `GET /get/{stateId}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestinationEnvelope {
    pub data: DestinationRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    #[serde(default, alias = "destName", alias = "state_name", alias = "stateName")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DestinationRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A booking row joined with its destination lookup
#[derive(Debug, Clone, PartialEq)]
pub struct BookedDestination {
    pub booking: BookingRow,
    pub destination: DestinationRecord,
}
