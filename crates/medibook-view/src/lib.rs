//! # medibook-view
//!
//! Presentation helpers for the dashboard's tables and detail dialogs:
//! schedule normalization across the backend's two wire shapes, duration
//! and date formatting, and status-badge tone mapping.

pub mod schedule;
pub mod status;

pub use schedule::{display_date, display_time, format_duration, ScheduleWindow};
pub use status::{appointment_status_tone, payment_status_tone, StatusTone};
