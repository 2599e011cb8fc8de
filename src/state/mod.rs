// State management module.
// Holds loaded collections, search input, and transient notifications.

pub mod articles;
pub mod search;
pub mod toast;

pub use articles::{ArticlesState, LoadingState};
pub use search::{SearchState, SearchView, filter, merge};
pub use toast::Toast;
