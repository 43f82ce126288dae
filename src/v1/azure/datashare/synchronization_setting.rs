use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecurrenceInterval;
use crate::v1::azure::{ArmEnvelope, ArmManager, ArmRequestBody, ArmResourceCreator, DataShareType};

pub type SynchronizationSettingOutput = ArmEnvelope<SynchronizationSettingProperties>;
pub type SynchronizationSettingManager =
    ArmManager<SynchronizationSettingInput, SynchronizationSettingOutput>;

pub struct SynchronizationSetting;

impl ArmResourceCreator for SynchronizationSetting {
    type Input = SynchronizationSettingInput;
    type Output = SynchronizationSettingOutput;
    fn r#type() -> DataShareType {
        DataShareType::SynchronizationSetting
    }
}

/// Desired state of a schedule-based synchronization setting. Only used on
/// the creation path; an existing schedule is left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynchronizationSettingInput {
    pub recurrence_interval: RecurrenceInterval,
    pub synchronization_time: DateTime<Utc>,
}

impl SynchronizationSettingInput {
    pub fn daily(synchronization_time: DateTime<Utc>) -> Self {
        Self {
            recurrence_interval: RecurrenceInterval::Day,
            synchronization_time,
        }
    }
}

impl ArmRequestBody for SynchronizationSettingInput {
    const KIND: Option<&'static str> = Some("ScheduleBased");
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SynchronizationSettingProperties {
    pub recurrence_interval: Option<RecurrenceInterval>,
    pub synchronization_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub provisioning_state: Option<String>,
    pub user_name: Option<String>,
}
