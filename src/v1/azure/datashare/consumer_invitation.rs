use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::v1::azure::{ArmEnvelope, AzureProvider};
use crate::v1::manager::ManagerError;

/// Invitation as seen by the consumer identity, listed at tenant scope.
pub type ConsumerInvitation = ArmEnvelope<ConsumerInvitationProperties>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerInvitationProperties {
    pub invitation_id: Option<String>,
    pub invitation_status: Option<String>,
    pub share_name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub sender: Option<String>,
    pub sender_email: Option<String>,
    pub sent_at: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub data_set_count: Option<i64>,
}

impl AzureProvider {
    /// All pending invitations for the current identity. An empty list is a
    /// normal answer, not an error.
    pub fn list_consumer_invitations(&self) -> Result<Vec<ConsumerInvitation>, ManagerError> {
        println!("Listing consumer invitations");
        self.client()
            .get_list("/providers/Microsoft.DataShare/listInvitations")
            .map_err(|e| ManagerError::ListFail(e.to_string()))
    }

    pub fn get_consumer_invitation(
        &self,
        location: &str,
        invitation_id: &str,
    ) -> Result<ConsumerInvitation, ManagerError> {
        println!("Looking up ConsumerInvitation[{}]", invitation_id);
        let path = format!(
            "/providers/Microsoft.DataShare/locations/{}/consumerInvitations/{}",
            location, invitation_id
        );
        self.client()
            .get(&path)
            .map_err(|e| ManagerError::LookupFail(e.to_string()))?
            .ok_or_else(|| {
                ManagerError::LookupFail(format!(
                    "ConsumerInvitation[{}] not found in [{}]",
                    invitation_id, location
                ))
            })
    }
}
