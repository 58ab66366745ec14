//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the app-wide session store provided at the root; `resources`
//! holds page-scoped list/detail state for the CRUD dashboards.

pub mod auth;
pub mod resources;
