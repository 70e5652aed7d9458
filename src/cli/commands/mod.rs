//! Command implementations

mod exclusions;
mod lookup;
mod shell;
mod validate;

pub use exclusions::exclusions;
pub use lookup::lookup;
pub use shell::shell;
pub use validate::validate;
