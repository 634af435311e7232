//! API route handlers

pub mod codes;
pub mod health;
pub mod incidents;
pub mod neighborhoods;
