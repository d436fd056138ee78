//! Seiten-URL: Ansichts-Parameter im Query-String, Annotationen im Fragment.

pub mod page;
pub mod query;

pub use page::PageUrl;
pub use query::ViewParams;
