pub mod errors;
#[cfg(test)]
pub mod fixtures;
pub mod models;
pub mod service;
