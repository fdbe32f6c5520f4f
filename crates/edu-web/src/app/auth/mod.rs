pub mod context;
pub mod hooks;
