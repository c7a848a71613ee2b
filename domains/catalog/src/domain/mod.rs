//! Domain entities for the Catalog domain

pub mod categories;
pub mod contents;
pub mod themes;
