use std::env;

use anyhow::Context;

/// Settings for one provisioning run on the provider side. Loaded once from
/// the environment (after dotenv) and passed explicitly to the flow; nothing
/// here lives longer than a single run.
#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub subscription_id: String,
    pub resource_group: String,
    pub account_name: String,
    pub share_name: String,
    pub dataset_name: String,
    pub storage_subscription_id: String,
    pub storage_resource_group: String,
    pub storage_account_name: String,
    pub file_system_name: String,
    pub dest_tenant_id: Option<String>,
    pub dest_object_id: Option<String>,
    pub dest_email: Option<String>,
    pub arm_token: String,
}

impl SourceSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            subscription_id: required("DATA_SHARE_SUBSCRIPTION_ID")?,
            resource_group: required("DATA_SHARE_RESOURCE_GROUP")?,
            account_name: required("DATA_SHARE_ACCOUNT")?,
            share_name: required("SHARE_NAME")?,
            dataset_name: required("DATASET_NAME")?,
            storage_subscription_id: required("STORAGE_SUBSCRIPTION_ID")?,
            storage_resource_group: required("STORAGE_RESOURCE_GROUP")?,
            storage_account_name: required("STORAGE_ACCOUNT")?,
            file_system_name: required("FILE_SYSTEM_NAME")?,
            dest_tenant_id: optional("DEST_TENANT_ID"),
            dest_object_id: optional("DEST_OBJECT_ID"),
            dest_email: optional("DEST_EMAIL"),
            arm_token: required("AZURE_ARM_TOKEN")?,
        })
    }
}

/// Settings for one provisioning run on the consumer side.
#[derive(Debug, Clone)]
pub struct DestSettings {
    pub subscription_id: String,
    pub resource_group: String,
    pub account_name: String,
    pub share_subscription_name: String,
    pub source_share_location: String,
    pub dest_storage_account_name: String,
    pub dest_file_system_name: String,
    pub arm_token: String,
}

impl DestSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            subscription_id: required("DEST_SUBSCRIPTION_ID")?,
            resource_group: required("DEST_RESOURCE_GROUP")?,
            account_name: required("DEST_DATA_SHARE_ACCOUNT")?,
            share_subscription_name: required("SHARE_SUBSCRIPTION_NAME")?,
            source_share_location: required("SOURCE_SHARE_LOCATION")?,
            dest_storage_account_name: required("DEST_STORAGE_ACCOUNT")?,
            dest_file_system_name: required("DEST_FILE_SYSTEM_NAME")?,
            arm_token: required("AZURE_ARM_TOKEN")?,
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("Missing environment variable [{}]", name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
