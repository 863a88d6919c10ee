//! Arcade Core - catalog model, preferences, filtering and pagination shared
//! by the browser front end

pub mod card;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod listing;
pub mod nav;
pub mod page;
pub mod prefs;
pub mod search;
pub mod surface;

pub use card::{render_card, CardTarget, DisplayUnit};
pub use catalog::{Catalog, CatalogLoader, CatalogSource, GameRecord};
pub use config::SiteConfig;
pub use error::{LoadError, PageError, PreferenceError, StorageError};
pub use listing::{CatalogSession, ViewMode};
pub use page::{PageContext, PageHints};
pub use prefs::{KeyValueStore, PreferenceStore, Rating};
pub use surface::{Region, RegionContent, Surface};
