use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{share_subscription::SourceShareSynchronizationSetting, RecurrenceInterval};
use crate::v1::azure::{ArmEnvelope, ArmManager, ArmRequestBody, ArmResourceCreator, DataShareType};

pub type TriggerOutput = ArmEnvelope<TriggerProperties>;
pub type TriggerManager = ArmManager<TriggerInput, TriggerOutput>;

pub struct Trigger;

impl ArmResourceCreator for Trigger {
    type Input = TriggerInput;
    type Output = TriggerOutput;
    fn r#type() -> DataShareType {
        DataShareType::Trigger
    }
}

/// Schedule-based trigger on a share subscription, derived from one of the
/// synchronization settings the source share publishes. Creation is a
/// long-running operation in ARM; the PUT is issued once and not polled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerInput {
    pub recurrence_interval: RecurrenceInterval,
    pub synchronization_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronization_mode: Option<String>,
}

impl TriggerInput {
    /// Mirrors the source share's schedule. Returns `None` when the setting
    /// carries no recurrence interval, which would make the trigger invalid.
    pub fn from_source_setting(setting: &SourceShareSynchronizationSetting) -> Option<Self> {
        let recurrence_interval = setting.properties.recurrence_interval?;
        Some(Self {
            recurrence_interval,
            synchronization_time: setting
                .properties
                .synchronization_time
                .unwrap_or_else(Utc::now),
            synchronization_mode: Some("Incremental".to_string()),
        })
    }
}

impl ArmRequestBody for TriggerInput {
    const KIND: Option<&'static str> = Some("ScheduleBased");
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerProperties {
    pub recurrence_interval: Option<RecurrenceInterval>,
    pub synchronization_time: Option<DateTime<Utc>>,
    pub synchronization_mode: Option<String>,
    pub trigger_status: Option<String>,
    pub provisioning_state: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub user_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::v1::azure::datashare::synchronization_setting::SynchronizationSettingProperties;

    fn source_setting(
        recurrence: Option<RecurrenceInterval>,
        time: Option<DateTime<Utc>>,
    ) -> SourceShareSynchronizationSetting {
        SourceShareSynchronizationSetting {
            id: None,
            name: None,
            resource_type: None,
            kind: Some("ScheduleBased".to_string()),
            properties: SynchronizationSettingProperties {
                recurrence_interval: recurrence,
                synchronization_time: time,
                ..Default::default()
            },
        }
    }

    #[test]
    fn trigger_mirrors_source_schedule() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 6, 30, 0).unwrap();
        let input =
            TriggerInput::from_source_setting(&source_setting(Some(RecurrenceInterval::Day), Some(at)))
                .unwrap();
        assert_eq!(
            input.to_body().unwrap(),
            json!({
                "kind": "ScheduleBased",
                "properties": {
                    "recurrenceInterval": "Day",
                    "synchronizationTime": "2024-05-01T06:30:00Z",
                    "synchronizationMode": "Incremental",
                }
            })
        );
    }

    #[test]
    fn setting_without_recurrence_yields_no_trigger() {
        assert!(TriggerInput::from_source_setting(&source_setting(None, None)).is_none());
    }
}
