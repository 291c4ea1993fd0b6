//! Query modules for the SneakPeak SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) or from the collaborators
//! it needs, and exposes methods returning `Result<T>` with typed models.

pub mod catalog;
pub mod likes;

pub use catalog::CatalogQuery;
pub use likes::LikeQuery;
