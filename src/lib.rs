pub mod config;
pub mod load;
pub mod query;
pub mod report;
pub mod table;
