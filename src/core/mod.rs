pub mod cli;
pub mod context;
pub mod models;
pub mod settings;
#[cfg(test)]
mod tests;
pub mod types;
