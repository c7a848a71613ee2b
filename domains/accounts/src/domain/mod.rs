//! Domain model for accounts

pub mod entities;
pub mod error;
