//! Record types served by the API.
//!
//! Every record type shares the same storage and service pipeline; a `Collection`
//! implementation supplies only what differs between them.

/// Per-entity configuration of the record pipeline.
pub trait Collection: Send + Sync + 'static {
    /// Value of the `collection` column for records of this type.
    const NAME: &'static str;

    /// Lower-case noun used in client-facing messages.
    const LABEL: &'static str;

    /// Append-only body field extended on every update, if the type keeps one.
    const HISTORY_FIELD: Option<&'static str> = None;

    /// Message of the soft not-found envelope returned by reads.
    fn not_found_message() -> String {
        format!("Can't find {}", Self::LABEL)
    }

    /// Message of the soft not-found envelope returned by deletes.
    fn delete_not_found_message() -> String {
        let mut label = Self::LABEL.chars();
        match label.next() {
            Some(first) => format!("{}{} not found", first.to_uppercase(), label.as_str()),
            None => "Record not found".to_string(),
        }
    }

    /// Message attached to a failed insert.
    fn create_failed_message() -> String {
        format!("Error create {}", Self::LABEL)
    }
}

/// User accounts.
pub struct Account;

impl Collection for Account {
    const NAME: &'static str = "account";
    const LABEL: &'static str = "account";
}

/// Devices assigned to patients, with their usage history.
pub struct Device;

impl Device {
    /// Body field looked up by `get_by_name`.
    pub const NAME_FIELD: &'static str = "name";

    /// Body field looked up by `get_by_patient_id`.
    pub const PATIENT_FIELD: &'static str = "patient_id";

    /// Append-only usage history of the device.
    pub const HISTORY: &'static str = "deviceUsingHistory";
}

impl Collection for Device {
    const NAME: &'static str = "device";
    const LABEL: &'static str = "device";
    const HISTORY_FIELD: Option<&'static str> = Some(Device::HISTORY);
}
