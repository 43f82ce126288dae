use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::synchronization_setting::SynchronizationSettingProperties;
use crate::v1::azure::{
    ArmEnvelope, ArmManager, ArmRequestBody, ArmResourceCreator, AzureProvider, DataShareType,
};
use crate::v1::manager::ManagerError;

pub type ShareSubscriptionOutput = ArmEnvelope<ShareSubscriptionProperties>;
pub type ShareSubscriptionManager = ArmManager<ShareSubscriptionInput, ShareSubscriptionOutput>;

/// Synchronization setting published by the source share, as listed through
/// a share subscription. Feeds trigger creation on the consumer side.
pub type SourceShareSynchronizationSetting = ArmEnvelope<SynchronizationSettingProperties>;

pub struct ShareSubscription;

impl ArmResourceCreator for ShareSubscription {
    type Input = ShareSubscriptionInput;
    type Output = ShareSubscriptionOutput;
    fn r#type() -> DataShareType {
        DataShareType::ShareSubscription
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSubscriptionInput {
    pub invitation_id: String,
    pub source_share_location: String,
}

impl ArmRequestBody for ShareSubscriptionInput {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareSubscriptionProperties {
    pub invitation_id: Option<String>,
    pub source_share_location: Option<String>,
    pub share_name: Option<String>,
    pub share_kind: Option<String>,
    pub share_subscription_status: Option<String>,
    pub provisioning_state: Option<String>,
    pub provider_email: Option<String>,
    pub provider_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl AzureProvider {
    /// Synchronization settings the source share publishes for this
    /// subscription. A POST list action in ARM.
    pub fn list_source_synchronization_settings(
        &self,
        account: &str,
        share_subscription: &str,
    ) -> Result<Vec<SourceShareSynchronizationSetting>, ManagerError> {
        println!(
            "Listing source synchronization settings of ShareSubscription[{}]",
            share_subscription
        );
        let path = format!(
            "{}/shareSubscriptions/{}/listSourceShareSynchronizationSettings",
            self.scope().account_path(account),
            share_subscription
        );
        self.client()
            .post_list(&path)
            .map_err(|e| ManagerError::ListFail(e.to_string()))
    }
}
