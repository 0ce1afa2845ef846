pub mod config;
pub mod log;
pub mod rotation;

#[doc(hidden)]
pub use tracing as __tracing;
