//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep small pure helpers (URL parsing, route matching,
//! style variants, static site facts) out of page and component code so they
//! can be unit tested without rendering.

pub mod brand;
pub mod nav;
pub mod site_info;
pub mod youtube;
