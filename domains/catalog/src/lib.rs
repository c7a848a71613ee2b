//! Catalog domain: categories, themes, multimedia contents

pub mod api;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::categories::*;
pub use domain::contents::*;
pub use domain::themes::*;

// Re-export API types
pub use api::routes;
pub use api::{CatalogState, ContentVisibility};
