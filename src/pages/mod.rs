//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (data fetches, form handling)
//! and delegates shared rendering to `components`. Access control lives in
//! the route table, not here.

pub mod admin;
pub mod assets;
pub mod create_rental;
pub mod dashboard;
pub mod faq;
pub mod features;
pub mod financial_summary;
pub mod home;
pub mod how;
pub mod login;
pub mod registration;
pub mod rentals;
