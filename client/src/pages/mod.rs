//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps itself in the guard for its route, owns its list or form
//! state, and delegates chrome to `components::layout`.

pub mod courses;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod roles;
pub mod transactions;
pub mod users;
