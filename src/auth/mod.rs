//! Session handling and the route guard for protected pages

mod context;
mod guard;
mod storage;

pub use context::*;
pub use guard::*;
pub use storage::*;
