//! API Routes
//!
//! Route handlers organized by functionality.

pub mod crops;
pub mod dashboard;
pub mod health;
pub mod pages;
pub mod summary;
