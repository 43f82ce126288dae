use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite key that names a remote resource uniquely within its parent
/// scope: the Data Share account, an optional parent container (a share or a
/// share subscription) and the resource name. Immutable once chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentity {
    pub account: String,
    pub container: Option<String>,
    pub name: String,
}

impl ResourceIdentity {
    /// Identity of a resource that lives directly under the account
    /// (a share, a share subscription).
    pub fn top_level(account: impl ToString, name: impl ToString) -> Self {
        Self {
            account: account.to_string(),
            container: None,
            name: name.to_string(),
        }
    }

    /// Identity of a resource nested under a share or share subscription
    /// (a dataset, a synchronization setting, an invitation, a mapping,
    /// a trigger).
    pub fn child(account: impl ToString, container: impl ToString, name: impl ToString) -> Self {
        Self {
            account: account.to_string(),
            container: Some(container.to_string()),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.container.as_deref() {
            Some(container) => write!(f, "{}/{}/{}", self.account, container, self.name),
            None => write!(f, "{}/{}", self.account, self.name),
        }
    }
}

/// Which branch an ensure call took. The remote system is the source of
/// truth; this is reported once per call and never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistenceOutcome<T> {
    /// The resource already existed; carries the retrieved state untouched.
    Found(T),
    /// The resource was absent and has been created with the desired state.
    Created(T),
}

impl<T> ExistenceOutcome<T> {
    pub fn state(&self) -> &T {
        match self {
            ExistenceOutcome::Found(state) => state,
            ExistenceOutcome::Created(state) => state,
        }
    }

    pub fn into_state(self) -> T {
        match self {
            ExistenceOutcome::Found(state) => state,
            ExistenceOutcome::Created(state) => state,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, ExistenceOutcome::Created(_))
    }
}
