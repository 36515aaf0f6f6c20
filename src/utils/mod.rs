// Shared browser helpers

pub mod constants;
pub mod cookie;
pub mod storage;

pub use constants::*;
pub use cookie::*;
pub use storage::*;
