use anyhow::Context;
use chrono::Utc;

use super::report;
use crate::v1::azure::datashare::{
    dataset::{DataSet, DataSetInput},
    invitation::{Invitation, InvitationInput},
    share::{Share, ShareInput, ShareKind},
    synchronization_setting::{SynchronizationSetting, SynchronizationSettingInput},
};
use crate::v1::azure::AzureProvider;
use crate::v1::config::SourceSettings;
use crate::v1::resource::ResourceIdentity;

/// Provider-side provisioning: share, dataset, synchronization schedule and
/// invitations, in that order. Every step is an idempotent ensure; a rerun
/// finds what a previous run created and moves on.
pub fn provision_source(azure: &AzureProvider, settings: &SourceSettings) -> anyhow::Result<()> {
    println!("--- Ensuring share is present ---");
    let shares = azure.manager::<Share>();
    let share_identity =
        ResourceIdentity::top_level(&settings.account_name, &settings.share_name);
    let share = shares
        .ensure(
            &share_identity,
            &ShareInput {
                description: Some("My Description".to_string()),
                share_kind: Some(ShareKind::CopyBased),
                terms: Some("My Terms".to_string()),
            },
        )
        .with_context(|| format!("Could not ensure Share[{}]", share_identity))?;
    report("Share", &settings.share_name, &share);

    println!("--- Ensuring dataset is present ---");
    let datasets = azure.manager::<DataSet>();
    let dataset_identity = ResourceIdentity::child(
        &settings.account_name,
        &settings.share_name,
        &settings.dataset_name,
    );
    let dataset = datasets
        .ensure(
            &dataset_identity,
            &DataSetInput {
                file_system: settings.file_system_name.clone(),
                resource_group: settings.storage_resource_group.clone(),
                storage_account_name: settings.storage_account_name.clone(),
                subscription_id: settings.storage_subscription_id.clone(),
            },
        )
        .with_context(|| format!("Could not ensure DataSet[{}]", dataset_identity))?;
    report("DataSet", &settings.dataset_name, &dataset);

    println!("--- Ensuring synchronization schedule is present ---");
    let schedules = azure.manager::<SynchronizationSetting>();
    let schedule_name = format!("{}-synchronization-settings", settings.share_name);
    let schedule_identity = ResourceIdentity::child(
        &settings.account_name,
        &settings.share_name,
        &schedule_name,
    );
    let schedule = schedules
        .ensure(
            &schedule_identity,
            &SynchronizationSettingInput::daily(Utc::now()),
        )
        .with_context(|| {
            format!("Could not ensure SynchronizationSetting[{}]", schedule_identity)
        })?;
    report("SynchronizationSetting", &schedule_name, &schedule);

    let invitations = azure.manager::<Invitation>();
    if let Some(email) = &settings.dest_email {
        println!("--- Ensuring email invitation is present ---");
        let identity = ResourceIdentity::child(
            &settings.account_name,
            &settings.share_name,
            "test-inv-email",
        );
        let outcome = invitations
            .ensure(&identity, &InvitationInput::by_email(email))
            .with_context(|| format!("Could not ensure Invitation[{}]", identity))?;
        report("Invitation", "test-inv-email", &outcome);
    }

    if let (Some(tenant_id), Some(object_id)) =
        (&settings.dest_tenant_id, &settings.dest_object_id)
    {
        println!("--- Ensuring service principal invitation is present ---");
        let identity =
            ResourceIdentity::child(&settings.account_name, &settings.share_name, "test-sp");
        let outcome = invitations
            .ensure(
                &identity,
                &InvitationInput::by_service_principal(tenant_id, object_id),
            )
            .with_context(|| format!("Could not ensure Invitation[{}]", identity))?;
        report("Invitation", "test-sp", &outcome);
    }

    Ok(())
}
