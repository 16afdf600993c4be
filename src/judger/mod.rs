mod definition;
pub mod facade;
#[cfg(test)]
pub(crate) mod mock;
pub mod provider;
pub mod registry;
pub mod utils;
pub mod verdict;

pub use definition::*;
