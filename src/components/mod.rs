//! Reusable UI pieces shared by the protected screens.

pub mod protected;
pub mod sidebar;
