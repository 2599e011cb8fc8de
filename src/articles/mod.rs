// Article data access.
// Loading, caching, and normalizing the blog and hub collections.

pub mod gate;
pub mod loader;
pub mod marker;
pub mod startup;
pub mod types;

pub use gate::FRESHNESS_WINDOW;
pub use types::{ArticleRecord, Collection};
