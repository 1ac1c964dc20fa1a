pub mod sources;
pub mod tests;
pub mod types;
