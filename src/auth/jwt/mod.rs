#[cfg(test)]
pub mod config;
pub mod models;
pub mod util;
