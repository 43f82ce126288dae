use serde::{Deserialize, Serialize};

use crate::v1::azure::{ArmEnvelope, ArmManager, ArmRequestBody, ArmResourceCreator, DataShareType};

pub type DataSetOutput = ArmEnvelope<DataSetProperties>;
pub type DataSetManager = ArmManager<DataSetInput, DataSetOutput>;

pub struct DataSet;

impl ArmResourceCreator for DataSet {
    type Input = DataSetInput;
    type Output = DataSetOutput;
    fn r#type() -> DataShareType {
        DataShareType::DataSet
    }
}

/// ADLS Gen2 file-system dataset: points the share at one file system of a
/// storage account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetInput {
    pub file_system: String,
    pub resource_group: String,
    pub storage_account_name: String,
    pub subscription_id: String,
}

impl ArmRequestBody for DataSetInput {
    const KIND: Option<&'static str> = Some("AdlsGen2FileSystem");
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSetProperties {
    pub data_set_id: Option<String>,
    pub file_system: Option<String>,
    pub resource_group: Option<String>,
    pub storage_account_name: Option<String>,
    pub subscription_id: Option<String>,
}
