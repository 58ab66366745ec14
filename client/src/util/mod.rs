//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `role`, `guard`, and `nav` hold the pure role logic (capabilities, route
//! access, menus); `auth` applies guard decisions to the router; `format`
//! renders values for tables.

pub mod auth;
pub mod format;
pub mod guard;
pub mod nav;
pub mod role;
