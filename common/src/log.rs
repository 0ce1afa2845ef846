//! Logging shorthands shared by every crate in the workspace.
//!
//! All of them forward to `tracing`. `success!` is an `INFO` event tagged with
//! the [`SUCCESS_TARGET`] target so the terminal formatter can render it apart
//! from plain progress messages.

pub const SUCCESS_TARGET: &str = "dialr::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}
