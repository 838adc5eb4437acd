//! Command implementations

pub mod common;
pub mod criteria;
pub mod csv;
pub mod cube;
pub mod define;
pub mod docref;
pub mod filter;
pub mod make;
pub mod schema;
pub mod union;
