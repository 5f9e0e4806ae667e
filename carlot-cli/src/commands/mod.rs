//! Command implementations for carlot CLI

pub mod check;
pub mod db;
pub mod serve;

pub use check::run_check;
pub use serve::run_serve;
