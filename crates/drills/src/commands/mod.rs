pub mod compress;
pub mod expenses;
pub mod strategies;
pub mod version;
