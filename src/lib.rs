pub mod analyzers;
pub mod error;
pub mod loader;
pub mod output;
pub mod records;
pub mod stats;
pub mod table;
