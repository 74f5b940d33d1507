mod errors;
pub mod parser;
pub mod repl;
mod shell;
mod storage;
mod store;
pub mod users;

pub use errors::*;
pub use shell::*;
pub use storage::*;
pub use store::*;
