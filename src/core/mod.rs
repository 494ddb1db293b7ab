pub mod error;
pub mod types;

pub use error::{Result, ScanError};
pub use types::{Colony, SectorMap, Strategy};
