pub mod core;
pub mod perception;
pub mod search;
pub mod report;
