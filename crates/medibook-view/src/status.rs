//! Status-to-tone mapping for dashboard badges.

use medibook_contracts::appointment::{AppointmentStatus, PaymentStatus};

/// The visual tone a status badge renders with. The hosting UI maps each
/// tone to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Warning,
    Success,
    Danger,
}

/// The badge tone for an appointment's lifecycle status.
pub fn appointment_status_tone(status: AppointmentStatus) -> StatusTone {
    match status {
        AppointmentStatus::Scheduled => StatusTone::Info,
        AppointmentStatus::InProgress => StatusTone::Warning,
        AppointmentStatus::Completed => StatusTone::Success,
        AppointmentStatus::Canceled => StatusTone::Danger,
    }
}

/// The badge tone for an appointment's payment status.
pub fn payment_status_tone(status: PaymentStatus) -> StatusTone {
    match status {
        PaymentStatus::Paid => StatusTone::Info,
        PaymentStatus::Unpaid => StatusTone::Danger,
    }
}

#[cfg(test)]
mod tests {
    use medibook_contracts::appointment::{AppointmentStatus, PaymentStatus};

    use super::{appointment_status_tone, payment_status_tone, StatusTone};

    #[test]
    fn each_appointment_status_has_a_distinct_tone() {
        assert_eq!(
            appointment_status_tone(AppointmentStatus::Scheduled),
            StatusTone::Info
        );
        assert_eq!(
            appointment_status_tone(AppointmentStatus::InProgress),
            StatusTone::Warning
        );
        assert_eq!(
            appointment_status_tone(AppointmentStatus::Completed),
            StatusTone::Success
        );
        assert_eq!(
            appointment_status_tone(AppointmentStatus::Canceled),
            StatusTone::Danger
        );
    }

    #[test]
    fn unpaid_reads_as_danger() {
        assert_eq!(payment_status_tone(PaymentStatus::Paid), StatusTone::Info);
        assert_eq!(payment_status_tone(PaymentStatus::Unpaid), StatusTone::Danger);
    }
}
