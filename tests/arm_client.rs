use chrono::Utc;
use dscloud::prelude::*;
use serde_json::json;
use tokio::runtime::Runtime;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SCHED_PATH: &str = "/subscriptions/sub-1/resourceGroups/rg-1\
                          /providers/Microsoft.DataShare/accounts/A/shares/S\
                          /synchronizationSettings/sched-1";

fn provider_for(rt: &Runtime, server: &MockServer) -> AzureProvider {
    AzureProvider::with_endpoint(
        rt.handle(),
        Url::parse(&server.uri()).unwrap(),
        ArmScope::new("sub-1", "rg-1"),
        "test-token",
    )
}

#[test]
fn ensure_creates_schedule_when_lookup_returns_not_found() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path(SCHED_PATH))
            .and(query_param("api-version", "2020-09-01"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"error": {"code": "ResourceNotFound"}})),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path(SCHED_PATH))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "name": "sched-1",
                "type": "Microsoft.DataShare/accounts/shares/synchronizationSettings",
                "kind": "ScheduleBased",
                "properties": {
                    "recurrenceInterval": "Day",
                    "synchronizationTime": "2024-05-01T06:30:00Z",
                    "provisioningState": "Succeeded",
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
    });

    let azure = provider_for(&rt, &server);
    let schedules = azure.manager::<SynchronizationSetting>();
    let identity = ResourceIdentity::child("A", "S", "sched-1");

    let outcome = schedules
        .ensure(&identity, &SynchronizationSettingInput::daily(Utc::now()))
        .unwrap();

    assert!(outcome.was_created());
    assert_eq!(
        outcome.state().properties.recurrence_interval,
        Some(RecurrenceInterval::Day)
    );
}

#[test]
fn ensure_leaves_existing_schedule_untouched() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path(SCHED_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "sched-1",
                "kind": "ScheduleBased",
                "properties": {
                    "recurrenceInterval": "Hour",
                    "synchronizationTime": "2024-01-01T00:00:00Z",
                }
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
    });

    let azure = provider_for(&rt, &server);
    let schedules = azure.manager::<SynchronizationSetting>();
    let identity = ResourceIdentity::child("A", "S", "sched-1");

    let outcome = schedules
        .ensure(&identity, &SynchronizationSettingInput::daily(Utc::now()))
        .unwrap();

    assert!(!outcome.was_created());
    assert_eq!(
        outcome.state().properties.recurrence_interval,
        Some(RecurrenceInterval::Hour)
    );
}

#[test]
fn non_not_found_lookup_error_propagates() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"error": {"code": "InternalServerError"}})),
            )
            .mount(&server)
            .await;
    });

    let azure = provider_for(&rt, &server);
    let shares = azure.manager::<Share>();
    let identity = ResourceIdentity::top_level("A", "TestShare");

    let result = shares.ensure(&identity, &ShareInput::default());

    match result {
        Err(ManagerError::LookupFail(msg)) => assert!(msg.contains("InternalServerError")),
        other => panic!("expected LookupFail, got {:?}", other.map(|o| o.was_created())),
    }
}

#[test]
fn invitation_list_follows_next_link() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    let next = format!("{}/page-2", server.uri());
    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path("/providers/Microsoft.DataShare/listInvitations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [
                    {"name": "inv-1", "properties": {"invitationId": "id-1", "shareName": "TestShare"}}
                ],
                "nextLink": next,
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [
                    {"name": "inv-2", "properties": {"invitationId": "id-2"}}
                ]
            })))
            .mount(&server)
            .await;
    });

    let azure = provider_for(&rt, &server);
    let invitations = azure.list_consumer_invitations().unwrap();

    assert_eq!(invitations.len(), 2);
    assert_eq!(
        invitations[0].properties.invitation_id.as_deref(),
        Some("id-1")
    );
    assert_eq!(
        invitations[1].properties.invitation_id.as_deref(),
        Some("id-2")
    );
}

#[test]
fn source_synchronization_settings_are_listed_with_post() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path(
                "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.DataShare\
                 /accounts/dest-acct/shareSubscriptions/TestSubscription\
                 /listSourceShareSynchronizationSettings",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "value": [{
                    "kind": "ScheduleBased",
                    "properties": {
                        "recurrenceInterval": "Day",
                        "synchronizationTime": "2024-05-01T06:30:00Z",
                    }
                }]
            })))
            .mount(&server)
            .await;
    });

    let azure = provider_for(&rt, &server);
    let settings = azure
        .list_source_synchronization_settings("dest-acct", "TestSubscription")
        .unwrap();

    assert_eq!(settings.len(), 1);
    assert_eq!(
        settings[0].properties.recurrence_interval,
        Some(RecurrenceInterval::Day)
    );
}

#[test]
fn destination_flow_is_a_no_op_without_invitations() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path("/providers/Microsoft.DataShare/listInvitations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
            .mount(&server)
            .await;
        // nothing may be created when there is nothing to accept
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
    });

    let azure = provider_for(&rt, &server);
    let settings = DestSettings {
        subscription_id: "sub-1".to_string(),
        resource_group: "rg-1".to_string(),
        account_name: "dest-acct".to_string(),
        share_subscription_name: "TestSubscription".to_string(),
        source_share_location: "westeurope".to_string(),
        dest_storage_account_name: "deststoragexyz".to_string(),
        dest_file_system_name: "shared-data".to_string(),
        arm_token: "test-token".to_string(),
    };

    provision_destination(&azure, &settings).unwrap();
}
