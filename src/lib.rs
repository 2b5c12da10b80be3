pub mod assignment;
pub mod error;
pub mod logger;
pub mod lr35902;
