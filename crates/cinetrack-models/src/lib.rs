pub mod list;
pub mod movie;
pub mod page;
pub mod query;

pub use list::ListKind;
pub use movie::Movie;
pub use page::MoviePage;
pub use query::{DiscoverFilters, PageQuery};
