use anyhow::Context;

use super::report;
use crate::v1::azure::datashare::{
    dataset_mapping::{DataSetMapping, DataSetMappingInput},
    share_subscription::{ShareSubscription, ShareSubscriptionInput},
    trigger::{Trigger, TriggerInput},
};
use crate::v1::azure::AzureProvider;
use crate::v1::config::DestSettings;
use crate::v1::resource::ResourceIdentity;

/// Consumer-side provisioning: accept the first pending invitation into a
/// share subscription, map the first source dataset onto the destination
/// file system and create a trigger mirroring the source schedule.
///
/// An empty invitation or dataset list ends the run as a clean no-op; the
/// source side simply has not provisioned yet.
pub fn provision_destination(azure: &AzureProvider, settings: &DestSettings) -> anyhow::Result<()> {
    println!("--- Listing consumer invitations ---");
    let invitations = azure
        .list_consumer_invitations()
        .context("Could not list consumer invitations")?;
    let Some(invitation) = invitations.first() else {
        println!("No invitations found for this identity");
        return Ok(());
    };
    let invitation_id = invitation
        .properties
        .invitation_id
        .clone()
        .context("Invitation is missing an invitation id")?;

    println!("--- Ensuring share subscription is present ---");
    let subscriptions = azure.manager::<ShareSubscription>();
    let subscription_identity = ResourceIdentity::top_level(
        &settings.account_name,
        &settings.share_subscription_name,
    );
    let subscription = subscriptions
        .ensure(
            &subscription_identity,
            &ShareSubscriptionInput {
                invitation_id,
                source_share_location: settings.source_share_location.clone(),
            },
        )
        .with_context(|| {
            format!("Could not ensure ShareSubscription[{}]", subscription_identity)
        })?;
    report(
        "ShareSubscription",
        &settings.share_subscription_name,
        &subscription,
    );

    println!("--- Listing consumer source datasets ---");
    let datasets = azure
        .list_consumer_source_datasets(&settings.account_name, &settings.share_subscription_name)
        .context("Could not list consumer source datasets")?;
    let Some(source_dataset) = datasets.first() else {
        println!("No source datasets found for this share subscription");
        return Ok(());
    };
    let data_set_id = source_dataset
        .properties
        .data_set_id
        .clone()
        .context("Source dataset is missing a dataset id")?;

    println!("--- Ensuring dataset mapping is present ---");
    let mappings = azure.manager::<DataSetMapping>();
    let mapping_name = format!("{}-dataset-mapping", settings.share_subscription_name);
    let mapping_identity = ResourceIdentity::child(
        &settings.account_name,
        &settings.share_subscription_name,
        &mapping_name,
    );
    let mapping = mappings
        .ensure(
            &mapping_identity,
            &DataSetMappingInput {
                data_set_id,
                file_system: settings.dest_file_system_name.clone(),
                resource_group: settings.resource_group.clone(),
                storage_account_name: settings.dest_storage_account_name.clone(),
                subscription_id: settings.subscription_id.clone(),
            },
        )
        .with_context(|| format!("Could not ensure DataSetMapping[{}]", mapping_identity))?;
    report("DataSetMapping", &mapping_name, &mapping);

    println!("--- Listing source synchronization settings ---");
    let sync_settings = azure
        .list_source_synchronization_settings(
            &settings.account_name,
            &settings.share_subscription_name,
        )
        .context("Could not list source synchronization settings")?;
    // just take the first, like the subscription takes the first invitation
    let Some(trigger_input) = sync_settings
        .first()
        .and_then(TriggerInput::from_source_setting)
    else {
        println!("No schedule-based synchronization setting published by the source share");
        return Ok(());
    };

    println!("--- Ensuring trigger is present ---");
    let triggers = azure.manager::<Trigger>();
    let trigger_name = format!("{}-trigger", settings.share_subscription_name);
    let trigger_identity = ResourceIdentity::child(
        &settings.account_name,
        &settings.share_subscription_name,
        &trigger_name,
    );
    let trigger = triggers
        .ensure(&trigger_identity, &trigger_input)
        .with_context(|| format!("Could not ensure Trigger[{}]", trigger_identity))?;
    report("Trigger", &trigger_name, &trigger);

    Ok(())
}
