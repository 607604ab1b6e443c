pub mod alloc;
pub mod panic;
