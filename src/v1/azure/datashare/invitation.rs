use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::v1::azure::{ArmEnvelope, ArmManager, ArmRequestBody, ArmResourceCreator, DataShareType};

pub type InvitationOutput = ArmEnvelope<InvitationProperties>;
pub type InvitationManager = ArmManager<InvitationInput, InvitationOutput>;

pub struct Invitation;

impl ArmResourceCreator for Invitation {
    type Input = InvitationInput;
    type Output = InvitationOutput;
    fn r#type() -> DataShareType {
        DataShareType::Invitation
    }
}

/// An invitation targets either an email address or an AAD service
/// principal (tenant id + object id), never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_active_directory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_object_id: Option<String>,
}

impl InvitationInput {
    pub fn by_email(email: impl ToString) -> Self {
        Self {
            target_email: Some(email.to_string()),
            ..Default::default()
        }
    }

    pub fn by_service_principal(tenant_id: impl ToString, object_id: impl ToString) -> Self {
        Self {
            target_active_directory_id: Some(tenant_id.to_string()),
            target_object_id: Some(object_id.to_string()),
            ..Default::default()
        }
    }
}

impl ArmRequestBody for InvitationInput {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvitationProperties {
    pub invitation_id: Option<String>,
    pub invitation_status: Option<String>,
    pub target_email: Option<String>,
    pub target_active_directory_id: Option<String>,
    pub target_object_id: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
}
