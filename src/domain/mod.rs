//! Domain models shared between the projector, the snapshot policy, and
//! the hosting application.

pub mod recurring;
pub mod scenario;
pub mod settings;
pub mod snapshot;
pub mod timeline;

pub use recurring::{RecurringInterval, RecurringItem};
pub use scenario::ScenarioItem;
pub use settings::ForecastSettings;
pub use snapshot::{Account, AssetSnapshot};
pub use timeline::TimelineMonth;
