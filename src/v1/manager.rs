use thiserror::Error;

use super::resource::{ExistenceOutcome, ResourceIdentity};

/// Boundary to the remote management plane for one resource type. A manager
/// only knows how to look a resource up by identity and how to create it;
/// `ensure` composes the two into an idempotent get-or-create.
///
/// `lookup` returning `Ok(None)` is the NotFound signal: expected control
/// flow, not a failure. Implementations map the provider's not-found errors
/// into it and let every other failure through unchanged.
pub trait ResourceManager<Input, Output>: Send + Sync {
    fn lookup(&self, identity: &ResourceIdentity) -> Result<Option<Output>, ManagerError>;
    fn create(&self, identity: &ResourceIdentity, input: &Input) -> Result<Output, ManagerError>;

    /// Check-then-act: at most one remote mutation per invocation. An
    /// existing resource is returned as-is, with no drift reconciliation.
    /// If another actor creates the resource between the lookup and the
    /// create, the create call's own conflict error is the only backstop.
    fn ensure(
        &self,
        identity: &ResourceIdentity,
        input: &Input,
    ) -> Result<ExistenceOutcome<Output>, ManagerError> {
        match self.lookup(identity)? {
            Some(existing) => Ok(ExistenceOutcome::Found(existing)),
            None => self
                .create(identity, input)
                .map(ExistenceOutcome::Created),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ManagerError {
    #[error("LookupFail: {0}")]
    LookupFail(String),
    #[error("CreateFail: {0}")]
    CreateFail(String),
    #[error("ListFail: {0}")]
    ListFail(String),
    #[error("InvalidIdentity: {0}")]
    InvalidIdentity(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::v1::resource::ExistenceOutcome;

    #[derive(Default)]
    struct FakeManager {
        remote: Mutex<HashMap<ResourceIdentity, String>>,
        lookup_error: Option<ManagerError>,
        create_error: Option<ManagerError>,
        lookups: AtomicUsize,
        creates: AtomicUsize,
    }

    impl FakeManager {
        fn with_existing(identity: &ResourceIdentity, state: &str) -> Self {
            let fake = Self::default();
            fake.remote
                .lock()
                .unwrap()
                .insert(identity.clone(), state.to_string());
            fake
        }
    }

    impl ResourceManager<String, String> for FakeManager {
        fn lookup(&self, identity: &ResourceIdentity) -> Result<Option<String>, ManagerError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.lookup_error {
                return Err(err.clone());
            }
            Ok(self.remote.lock().unwrap().get(identity).cloned())
        }

        fn create(
            &self,
            identity: &ResourceIdentity,
            input: &String,
        ) -> Result<String, ManagerError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.create_error {
                return Err(err.clone());
            }
            self.remote
                .lock()
                .unwrap()
                .insert(identity.clone(), input.clone());
            Ok(input.clone())
        }
    }

    #[test]
    fn ensure_creates_when_lookup_finds_nothing() {
        let manager = FakeManager::default();
        let identity = ResourceIdentity::child("A", "S", "sched-1");

        let outcome = manager
            .ensure(&identity, &"daily at midnight".to_string())
            .unwrap();

        assert_eq!(
            outcome,
            ExistenceOutcome::Created("daily at midnight".to_string())
        );
        assert_eq!(manager.creates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ensure_returns_found_without_creating() {
        let identity = ResourceIdentity::child("A", "S", "sched-1");
        let manager = FakeManager::with_existing(&identity, "hourly");

        let outcome = manager.ensure(&identity, &"daily".to_string()).unwrap();

        assert_eq!(outcome, ExistenceOutcome::Found("hourly".to_string()));
        assert_eq!(manager.creates.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn ensure_twice_creates_at_most_once() {
        let manager = FakeManager::default();
        let identity = ResourceIdentity::top_level("A", "TestShare");
        let desired = "copy based".to_string();

        let first = manager.ensure(&identity, &desired).unwrap();
        let second = manager.ensure(&identity, &desired).unwrap();

        assert!(first.was_created());
        assert!(!second.was_created());
        assert_eq!(second.state(), &desired);
        assert_eq!(manager.creates.load(Ordering::SeqCst), 1);
        assert_eq!(manager.lookups.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn lookup_failure_propagates_and_skips_create() {
        let manager = FakeManager {
            lookup_error: Some(ManagerError::LookupFail("throttled".to_string())),
            ..Default::default()
        };
        let identity = ResourceIdentity::top_level("A", "TestShare");

        let result = manager.ensure(&identity, &"desired".to_string());

        assert!(matches!(result, Err(ManagerError::LookupFail(_))));
        assert_eq!(manager.creates.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn create_failure_propagates() {
        let manager = FakeManager {
            create_error: Some(ManagerError::CreateFail("conflict".to_string())),
            ..Default::default()
        };
        let identity = ResourceIdentity::top_level("A", "TestShare");

        let result = manager.ensure(&identity, &"desired".to_string());

        assert!(matches!(result, Err(ManagerError::CreateFail(_))));
        assert_eq!(manager.creates.load(Ordering::SeqCst), 1);
    }
}
