pub mod build;
pub mod check;
pub mod prune;
pub mod repair;

mod sources;

#[cfg(test)]
mod fixtures;
