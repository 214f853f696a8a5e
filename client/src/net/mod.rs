//! Networking modules for the external contact-intake service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP transport and reply interpretation, `types` defines
//! the JSON wire schema.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
