//! Client-side application state.
//!
//! DESIGN
//! ======
//! State types are plain structs with pure transition methods; pages wrap
//! them in `RwSignal`s so the logic stays testable without a reactive runtime.

pub mod contact;
