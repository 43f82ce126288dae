use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::v1::azure::{ArmEnvelope, ArmManager, ArmRequestBody, ArmResourceCreator, DataShareType};

pub type ShareOutput = ArmEnvelope<ShareProperties>;
pub type ShareManager = ArmManager<ShareInput, ShareOutput>;

pub struct Share;

impl ArmResourceCreator for Share {
    type Input = ShareInput;
    type Output = ShareOutput;
    fn r#type() -> DataShareType {
        DataShareType::Share
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareKind {
    CopyBased,
    InPlace,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_kind: Option<ShareKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

impl ArmRequestBody for ShareInput {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShareProperties {
    pub description: Option<String>,
    pub share_kind: Option<ShareKind>,
    pub terms: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub provisioning_state: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}
