//! Device-only lookups layered on the shared record operations.

use serde_json::Value;

use crate::{
    model::envelope::{Envelope, Outcome},
    server::{
        model::{
            collection::{Collection, Device},
            record::Record,
        },
        service::record::RecordService,
    },
};

pub type DeviceService<'a> = RecordService<'a, Device>;

impl RecordService<'_, Device> {
    /// Gets the oldest device with the given name
    pub async fn get_by_name(&self, name: &str) -> Envelope<Record> {
        self.get_by_field(Device::NAME_FIELD, name).await
    }

    /// Gets the oldest device assigned to the given patient
    pub async fn get_by_patient_id(&self, patient_id: &str) -> Envelope<Record> {
        self.get_by_field(Device::PATIENT_FIELD, patient_id).await
    }

    /// Projects a device's usage history.
    ///
    /// Whenever `get_by_id` yields no device, whether it is absent, the identifier is
    /// malformed or the store failed, the result is the soft not-found envelope.
    pub async fn get_history(&self, id: &str) -> Envelope<Vec<Value>> {
        match self.get_by_id(id).await.data {
            Some(record) => Envelope::success(Outcome::Found, record.history(Device::HISTORY)),
            None => Envelope::not_found(Device::not_found_message()),
        }
    }
}
