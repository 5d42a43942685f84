//! Bundled form schema documents.
//!
//! Each constant is a TOML schema compiled into the binary; the loader
//! functions parse them on demand. Parsing can only fail if a bundled
//! document is malformed, which the crate's tests guard against.

use medibook_contracts::error::MedibookResult;

use crate::rule::FormSchema;

pub const DOCTOR_CREATE: &str = include_str!("../schemas/doctor_create.toml");
pub const DOCTOR_UPDATE: &str = include_str!("../schemas/doctor_update.toml");
pub const ADMIN_CREATE: &str = include_str!("../schemas/admin_create.toml");
pub const ADMIN_UPDATE: &str = include_str!("../schemas/admin_update.toml");
pub const SCHEDULE_CREATE: &str = include_str!("../schemas/schedule_create.toml");
pub const APPOINTMENT_STATUS: &str = include_str!("../schemas/appointment_status.toml");

pub fn doctor_create() -> MedibookResult<FormSchema> {
    FormSchema::from_toml_str(DOCTOR_CREATE)
}

pub fn doctor_update() -> MedibookResult<FormSchema> {
    FormSchema::from_toml_str(DOCTOR_UPDATE)
}

pub fn admin_create() -> MedibookResult<FormSchema> {
    FormSchema::from_toml_str(ADMIN_CREATE)
}

pub fn admin_update() -> MedibookResult<FormSchema> {
    FormSchema::from_toml_str(ADMIN_UPDATE)
}

pub fn schedule_create() -> MedibookResult<FormSchema> {
    FormSchema::from_toml_str(SCHEDULE_CREATE)
}

pub fn appointment_status() -> MedibookResult<FormSchema> {
    FormSchema::from_toml_str(APPOINTMENT_STATUS)
}
