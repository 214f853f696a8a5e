//! Brand style variants.
//!
//! DESIGN
//! ======
//! Colour and hover treatment live in `style/main.css`; components only pick
//! a BEM modifier class from these enums, so no inline style is ever mutated
//! from event handlers.

#[cfg(test)]
#[path = "brand_test.rs"]
mod brand_test;

/// Brand palette used by badges, cards, and accents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    /// Leaf green.
    #[default]
    Brand,
    /// Burgundy.
    Wine,
}

impl Tone {
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Wine => "wine",
        }
    }
}

/// Visual weight of a button-styled link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Wine,
    Ghost,
}

impl ButtonVariant {
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Wine => "wine",
            Self::Ghost => "ghost",
        }
    }
}

/// Where a card draws its accent stripe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Left,
    Top,
    None,
}

impl Accent {
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::None => "none",
        }
    }
}

/// `block block--modifier`.
pub fn variant_class(block: &str, modifier: &str) -> String {
    format!("{block} {block}--{modifier}")
}

/// Join the non-empty class names with single spaces.
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
