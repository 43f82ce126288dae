pub mod v1;

pub mod prelude {
    pub use crate::v1::azure::{
        client::*,
        datashare::{
            consumer_invitation::*, consumer_source_dataset::*, dataset::*, dataset_mapping::*,
            invitation::*, share::*, share_subscription::*, synchronization_setting::*,
            trigger::*, *,
        },
        *,
    };
    pub use crate::v1::config::*;
    pub use crate::v1::manager::*;
    pub use crate::v1::resource::{ExistenceOutcome::*, *};
    pub use crate::v1::solutions::{dest::*, source::*};
}
