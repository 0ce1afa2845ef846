pub mod dial;
pub mod error;
pub mod parser;
pub mod password;
