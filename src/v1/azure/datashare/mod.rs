pub mod consumer_invitation;
pub mod consumer_source_dataset;
pub mod dataset;
pub mod dataset_mapping;
pub mod invitation;
pub mod share;
pub mod share_subscription;
pub mod synchronization_setting;
pub mod trigger;

use serde::{Deserialize, Serialize};

/// Recurrence of schedule-based synchronization settings and triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceInterval {
    Hour,
    Day,
}
