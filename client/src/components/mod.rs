//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared site chrome (header, footer) and the branded
//! building blocks pages compose: sections, cards, badges, button links,
//! media frames, and the contact form pieces.

pub mod badge;
pub mod branded_card;
pub mod button_link;
pub mod cards;
pub mod footer;
pub mod form_field;
pub mod image_frame;
pub mod navbar;
pub mod person_card;
pub mod policy_card;
pub mod section;
pub mod site_layout;
pub mod status_banner;
pub mod youtube_embed;
