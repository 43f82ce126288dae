pub mod client;
pub mod datashare;

use std::{marker::PhantomData, sync::Arc};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};
use tokio::runtime::Handle;
use url::Url;

use self::client::{ArmClient, ArmError, ARM_ENDPOINT};
use super::manager::{ManagerError, ResourceManager};
use super::resource::ResourceIdentity;

/// Subscription and resource group every Data Share resource of one run
/// lives under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmScope {
    pub subscription_id: String,
    pub resource_group: String,
}

impl ArmScope {
    pub fn new(subscription_id: impl ToString, resource_group: impl ToString) -> Self {
        Self {
            subscription_id: subscription_id.to_string(),
            resource_group: resource_group.to_string(),
        }
    }

    fn provider_root(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.DataShare",
            self.subscription_id, self.resource_group
        )
    }

    pub fn account_path(&self, account: &str) -> String {
        format!("{}/accounts/{}", self.provider_root(), account)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, EnumString, Display)]
pub enum DataShareType {
    Share,
    DataSet,
    SynchronizationSetting,
    Invitation,
    ShareSubscription,
    DataSetMapping,
    Trigger,
}

impl DataShareType {
    fn collection(&self) -> &'static str {
        match self {
            DataShareType::Share => "shares",
            DataShareType::DataSet => "dataSets",
            DataShareType::SynchronizationSetting => "synchronizationSettings",
            DataShareType::Invitation => "invitations",
            DataShareType::ShareSubscription => "shareSubscriptions",
            DataShareType::DataSetMapping => "dataSetMappings",
            DataShareType::Trigger => "triggers",
        }
    }

    /// Collection of the parent container this type nests under, if any.
    fn parent_collection(&self) -> Option<&'static str> {
        match self {
            DataShareType::Share | DataShareType::ShareSubscription => None,
            DataShareType::DataSet
            | DataShareType::SynchronizationSetting
            | DataShareType::Invitation => Some("shares"),
            DataShareType::DataSetMapping | DataShareType::Trigger => Some("shareSubscriptions"),
        }
    }
}

pub(crate) fn resource_path(
    scope: &ArmScope,
    rtype: DataShareType,
    identity: &ResourceIdentity,
) -> Result<String, ManagerError> {
    let account = scope.account_path(&identity.account);
    match (rtype.parent_collection(), identity.container.as_deref()) {
        (None, None) => Ok(format!("{}/{}/{}", account, rtype.collection(), identity.name)),
        (Some(parent), Some(container)) => Ok(format!(
            "{}/{}/{}/{}/{}",
            account,
            parent,
            container,
            rtype.collection(),
            identity.name
        )),
        (None, Some(container)) => Err(ManagerError::InvalidIdentity(format!(
            "{}[{}] does not nest under [{}]",
            rtype, identity.name, container
        ))),
        (Some(parent), None) => Err(ManagerError::InvalidIdentity(format!(
            "{}[{}] needs a parent under [{}]",
            rtype, identity.name, parent
        ))),
    }
}

/// Request body of a PUT create call: the resource properties, wrapped in
/// the ARM envelope together with the discriminator kind where the resource
/// is polymorphic (datasets, mappings, synchronization settings, triggers).
pub trait ArmRequestBody: Serialize {
    const KIND: Option<&'static str> = None;

    fn to_body(&self) -> Result<Value, serde_json::Error> {
        let mut body = Map::new();
        if let Some(kind) = Self::KIND {
            body.insert("kind".to_string(), Value::String(kind.to_string()));
        }
        body.insert("properties".to_string(), serde_json::to_value(self)?);
        Ok(Value::Object(body))
    }
}

/// ARM resource envelope as returned by GET and PUT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmEnvelope<P> {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    pub properties: P,
}

/// One manager per Data Share resource type. Lookup is a GET of the
/// resource path, create a PUT of the enveloped desired state; both paths
/// are derived from the identity, so the per-resource modules only declare
/// their input and output shapes.
pub struct ArmManager<Input, Output> {
    client: ArmClient,
    scope: ArmScope,
    rtype: DataShareType,
    _phantom: PhantomData<(Input, Output)>,
}

impl<Input, Output> ArmManager<Input, Output> {
    pub fn new(client: &ArmClient, scope: &ArmScope, rtype: DataShareType) -> Self {
        Self {
            client: client.clone(),
            scope: scope.clone(),
            rtype,
            _phantom: PhantomData,
        }
    }
}

impl<Input, Output> ResourceManager<Input, Output> for ArmManager<Input, Output>
where
    Input: ArmRequestBody + Send + Sync,
    Output: DeserializeOwned + Send + Sync,
{
    fn lookup(&self, identity: &ResourceIdentity) -> Result<Option<Output>, ManagerError> {
        let path = resource_path(&self.scope, self.rtype, identity)?;
        println!("Looking up {}[{}]", self.rtype, identity);
        self.client
            .get(&path)
            .map_err(|e| ManagerError::LookupFail(e.to_string()))
    }

    fn create(&self, identity: &ResourceIdentity, input: &Input) -> Result<Output, ManagerError> {
        let path = resource_path(&self.scope, self.rtype, identity)?;
        let body = input
            .to_body()
            .map_err(|e| ManagerError::CreateFail(e.to_string()))?;
        println!("Creating {}[{}]", self.rtype, identity);
        self.client
            .put(&path, &body)
            .map_err(|e| ManagerError::CreateFail(e.to_string()))
    }
}

pub trait ArmResourceCreator {
    type Input: ArmRequestBody + Send + Sync + 'static;
    type Output: DeserializeOwned + Send + Sync + 'static;
    fn r#type() -> DataShareType;
    fn manager(
        client: &ArmClient,
        scope: &ArmScope,
    ) -> Arc<dyn ResourceManager<Self::Input, Self::Output>> {
        Arc::new(ArmManager::new(client, scope, Self::r#type()))
    }
}

/// Entry point for one automation run: an ARM client scoped to the account's
/// subscription and resource group, handing out typed resource managers.
pub struct AzureProvider {
    client: ArmClient,
    scope: ArmScope,
}

impl AzureProvider {
    pub fn new(
        handle: &Handle,
        scope: ArmScope,
        token: impl Into<String>,
    ) -> Result<Self, ArmError> {
        let endpoint =
            Url::parse(ARM_ENDPOINT).map_err(|e| ArmError::InvalidUrl(e.to_string()))?;
        Ok(Self::with_endpoint(handle, endpoint, scope, token))
    }

    pub fn with_endpoint(
        handle: &Handle,
        endpoint: Url,
        scope: ArmScope,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client: ArmClient::new(handle, endpoint, token),
            scope,
        }
    }

    pub fn manager<R: ArmResourceCreator>(
        &self,
    ) -> Arc<dyn ResourceManager<R::Input, R::Output>> {
        R::manager(&self.client, &self.scope)
    }

    pub(crate) fn client(&self) -> &ArmClient {
        &self.client
    }

    pub(crate) fn scope(&self) -> &ArmScope {
        &self.scope
    }
}
