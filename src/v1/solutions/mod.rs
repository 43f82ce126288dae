pub mod dest;
pub mod source;

use serde::Serialize;

use crate::v1::resource::ExistenceOutcome;

/// Prints which branch an ensure took, plus the remote state it settled on.
pub(crate) fn report<T: Serialize>(label: &str, name: &str, outcome: &ExistenceOutcome<T>) {
    match outcome {
        ExistenceOutcome::Created(_) => println!("{}[{}] created", label, name),
        ExistenceOutcome::Found(_) => println!("{}[{}] already exists", label, name),
    }
    if let Ok(body) = serde_json::to_string_pretty(outcome.state()) {
        println!("{}", body);
    }
}
