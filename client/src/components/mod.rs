//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `AuthStore` from context; guards decide what a
//! route may show and the layout supplies header and role navigation.

pub mod guards;
pub mod layout;
pub mod list_status;
pub mod sidebar;
