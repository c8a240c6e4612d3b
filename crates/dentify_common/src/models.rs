// --- File: crates/dentify_common/src/models.rs ---

// Wire data structures exchanged with the clinic's customer REST API.
// These are immutable snapshots of server state; nothing here is cached
// across views beyond the current rendering pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an appointment as reported by the server.
///
/// Unknown values deserialize to `Unknown` instead of failing, so a newer
/// server vocabulary cannot break the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "PENDING_DEPOSIT")]
    PendingDeposit,
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "CHECKED_IN")]
    CheckedIn,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "CANCELLED")]
    Cancelled,
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

impl AppointmentStatus {
    /// Wire spelling of the status, used verbatim for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::PendingDeposit => "PENDING_DEPOSIT",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::CheckedIn => "CHECKED_IN",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Unknown => "UNKNOWN",
        }
    }

    /// Completed and cancelled appointments accept no further customer action.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled
        )
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        AppointmentStatus::Pending
    }
}

/// How the clinic should reach the customer about the appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactChannel {
    #[serde(rename = "PHONE")]
    Phone,
    #[serde(rename = "ZALO")]
    Zalo,
    #[serde(rename = "EMAIL")]
    Email,
}

impl ContactChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactChannel::Phone => "PHONE",
            ContactChannel::Zalo => "ZALO",
            ContactChannel::Email => "EMAIL",
        }
    }

    /// Parse free-form user input into a channel.
    pub fn from_input(input: &str) -> Result<Self, String> {
        match input.trim().to_uppercase().as_str() {
            "PHONE" => Ok(ContactChannel::Phone),
            "ZALO" => Ok(ContactChannel::Zalo),
            "EMAIL" => Ok(ContactChannel::Email),
            other => Err(format!("Unknown contact channel: {}", other)),
        }
    }
}

/// A bookable time interval for a given service on a given date.
///
/// Snapshot returned by the server for one (date, serviceId) query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: i64,
    /// Day the slot belongs to; absent on older server versions.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Start of the interval, `HH:MM` or `HH:MM:SS`.
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// End of the interval, `HH:MM` or `HH:MM:SS`.
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "dentistId", default)]
    pub dentist_id: Option<i64>,
    #[serde(rename = "dentistName", default)]
    pub dentist_name: Option<String>,
    /// Explicit availability verdict; `Some(false)` means already taken.
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(rename = "bookedCount", default)]
    pub booked_count: Option<i32>,
    /// Remaining seats; `None` when the server does not track capacity.
    #[serde(rename = "availableSpots", default)]
    pub available_spots: Option<i32>,
    /// Server verdict that this customer already holds an overlapping
    /// appointment; treated as opaque client-side.
    #[serde(default)]
    pub disabled: bool,
}

/// Read-only projection of an appointment for the customer views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(rename = "serviceId", default)]
    pub service_id: Option<i64>,
    #[serde(rename = "serviceName", default)]
    pub service_name: Option<String>,
    #[serde(rename = "dentistId", default)]
    pub dentist_id: Option<i64>,
    #[serde(rename = "dentistName", default)]
    pub dentist_name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "startTime", default)]
    pub start_time: Option<String>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(rename = "contactChannel", default)]
    pub contact_channel: Option<ContactChannel>,
    #[serde(rename = "contactValue", default)]
    pub contact_value: Option<String>,
    /// Granted by the server only for today's confirmed appointments;
    /// never recomputed client-side.
    #[serde(rename = "canCheckIn", default)]
    pub can_check_in: bool,
}

/// Body of `POST /customer/appointments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(rename = "slotId")]
    pub slot_id: i64,
    #[serde(rename = "serviceId")]
    pub service_id: i64,
    /// Optional free-text note; serialized as an explicit null when empty.
    #[serde(rename = "patientNote")]
    pub patient_note: Option<String>,
    #[serde(rename = "contactChannel")]
    pub contact_channel: ContactChannel,
    #[serde(rename = "contactValue")]
    pub contact_value: String,
}

/// Body of `POST /customer/appointments/{id}/reschedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleRequest {
    #[serde(rename = "selectedDate")]
    pub selected_date: NaiveDate,
    /// New start time, `HH:MM`.
    #[serde(rename = "selectedTime")]
    pub selected_time: String,
}

/// Error payload shape used by the server for non-2xx responses.
///
/// `error` carries a machine code (for example `CHECKIN_NOT_ALLOWED`),
/// `message` the human text when the server provides one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The text to surface to the user: `message` first, then `error`.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.error.as_deref().filter(|e| !e.is_empty()))
    }
}
