pub mod assets;
pub mod json_store;
pub mod links;
pub mod store;
pub mod usage;

pub use assets::AssetFolder;
pub use json_store::{load_content, load_links, save, to_pretty_string};
pub use links::AddLinkOutcome;
pub use store::{DashboardSnapshot, SiteStore};
pub use usage::{line_of_first_occurrence, ReferenceIndex, UsageEntry, UsageKind};
