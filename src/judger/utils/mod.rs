pub mod request;
mod utils;

pub use utils::*;
