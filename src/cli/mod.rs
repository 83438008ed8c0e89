//! CLI command implementations

pub mod badges;
pub mod export;
pub mod init;
pub mod input;
pub mod streak;
pub mod summary;
pub mod xp;
