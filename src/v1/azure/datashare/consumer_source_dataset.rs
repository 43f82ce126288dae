use serde::{Deserialize, Serialize};

use crate::v1::azure::{ArmEnvelope, AzureProvider};
use crate::v1::manager::ManagerError;

/// Source dataset visible through a share subscription; its `data_set_id`
/// is what a dataset mapping binds to.
pub type ConsumerSourceDataSet = ArmEnvelope<ConsumerSourceDataSetProperties>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerSourceDataSetProperties {
    pub data_set_id: Option<String>,
    pub data_set_name: Option<String>,
    pub data_set_location: Option<String>,
    pub data_set_path: Option<String>,
    pub data_set_type: Option<String>,
}

impl AzureProvider {
    pub fn list_consumer_source_datasets(
        &self,
        account: &str,
        share_subscription: &str,
    ) -> Result<Vec<ConsumerSourceDataSet>, ManagerError> {
        println!(
            "Listing consumer source datasets of ShareSubscription[{}]",
            share_subscription
        );
        let path = format!(
            "{}/shareSubscriptions/{}/consumerSourceDataSets",
            self.scope().account_path(account),
            share_subscription
        );
        self.client()
            .get_list(&path)
            .map_err(|e| ManagerError::ListFail(e.to_string()))
    }
}
