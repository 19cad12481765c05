//! Reports
//!
//! Pure aggregations over loaded expenses. Nothing here touches storage.

pub mod summary;

pub use summary::{summarize, CategoryTotal, Summary};
