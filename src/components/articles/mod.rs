//! Article listing with client-side filtering and sorting.

mod component;
pub mod filter;
pub mod select;
pub mod types;

pub use component::{ArticleBrowser, series_options, tag_options};
pub use filter::{FilterState, SortOrder};
pub use select::{CustomSelect, SelectOption};
pub use types::{ArticleCard, CardDate};
