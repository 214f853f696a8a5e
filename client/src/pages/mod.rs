//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is static copy composed from `components`; only the Contact page
//! owns state. Pages render inside `SiteLayout`, so none of them draws the
//! header or footer itself.

pub mod about;
pub mod contact;
pub mod get_involved;
pub mod governance;
pub mod home;
pub mod not_found;
pub mod policies;
pub mod programs;
