//! Appointment status types.
//!
//! Status values are spelled exactly as the backend spells them — including
//! "INPROGRESS" without a separator — so the serde representation must not
//! be regenerated from the Rust variant names.

use serde::{Deserialize, Serialize};

/// The lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "CANCELED")]
    Canceled,
}

impl AppointmentStatus {
    /// The backend wire spelling of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::InProgress => "INPROGRESS",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the appointment has been paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}
