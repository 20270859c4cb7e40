//! Already-loaded records handed to the recap screens.
//!
//! The persistence layer is external; the command-line screens read one JSON
//! snapshot of it so that every computation sees a consistent set of inputs.
//!
//! ```json
//! {
//!   "subjects": [{ "id": "s1", "name": "Ayu", "group": "7A" }],
//!   "attendance": [{ "subject_id": "s1", "date": "2024-02-05", "category": "present" }],
//!   "obligations": [{ "id": "spp", "name": "Tuition", "due_day": 10 }],
//!   "fulfillments": [{ "subject_id": "s1", "obligation_id": "spp", "period": "2024-02", "fulfilled_on": "2024-02-08", "amount": 150000 }],
//!   "permits": [{ "subject_id": "s1", "starts_at": "2024-02-12T08:00:00", "ends_at": "2024-02-12T12:00:00" }]
//! }
//! ```

use crate::libs::messages::Message;
use crate::libs::obligation::{FulfillmentRecord, ObligationDefinition};
use crate::libs::permit::LeavePermit;
use crate::libs::record::{Attendance, EventRecord, Subject};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub attendance: Vec<EventRecord<Attendance>>,
    #[serde(default)]
    pub obligations: Vec<ObligationDefinition>,
    #[serde(default)]
    pub fulfillments: Vec<FulfillmentRecord>,
    #[serde(default)]
    pub permits: Vec<LeavePermit>,
}

impl Dataset {
    /// Reads and validates a dataset file.
    ///
    /// Obligations and permits are validated while parsing, so a malformed
    /// due day or an inverted permit fails the whole load.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| Message::DatasetReadFailed(path.display().to_string()))?;
        let dataset: Dataset = serde_json::from_str(&raw).with_context(|| Message::DatasetParseFailed(path.display().to_string()))?;

        tracing::info!(
            path = %path.display(),
            subjects = dataset.subjects.len(),
            attendance = dataset.attendance.len(),
            obligations = dataset.obligations.len(),
            fulfillments = dataset.fulfillments.len(),
            permits = dataset.permits.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    pub fn obligation(&self, id: &str) -> Option<&ObligationDefinition> {
        self.obligations.iter().find(|obligation| obligation.id == id)
    }

    pub fn loaded_message(&self) -> Message {
        Message::DatasetLoaded {
            subjects: self.subjects.len(),
            records: self.attendance.len(),
            obligations: self.obligations.len(),
            fulfillments: self.fulfillments.len(),
            permits: self.permits.len(),
        }
    }
}
