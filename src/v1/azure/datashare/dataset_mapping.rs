use serde::{Deserialize, Serialize};

use crate::v1::azure::{ArmEnvelope, ArmManager, ArmRequestBody, ArmResourceCreator, DataShareType};

pub type DataSetMappingOutput = ArmEnvelope<DataSetMappingProperties>;
pub type DataSetMappingManager = ArmManager<DataSetMappingInput, DataSetMappingOutput>;

pub struct DataSetMapping;

impl ArmResourceCreator for DataSetMapping {
    type Input = DataSetMappingInput;
    type Output = DataSetMappingOutput;
    fn r#type() -> DataShareType {
        DataShareType::DataSetMapping
    }
}

/// Maps a source dataset (by its `data_set_id`) onto a destination ADLS
/// Gen2 file system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetMappingInput {
    pub data_set_id: String,
    pub file_system: String,
    pub resource_group: String,
    pub storage_account_name: String,
    pub subscription_id: String,
}

impl ArmRequestBody for DataSetMappingInput {
    const KIND: Option<&'static str> = Some("AdlsGen2FileSystem");
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSetMappingProperties {
    pub data_set_id: Option<String>,
    pub data_set_mapping_status: Option<String>,
    pub file_system: Option<String>,
    pub resource_group: Option<String>,
    pub storage_account_name: Option<String>,
    pub subscription_id: Option<String>,
    pub provisioning_state: Option<String>,
}
