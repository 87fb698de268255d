pub mod fake;
mod macros;
pub mod memory;
