use super::*;

#[test]
fn tone_default_is_brand() {
    assert_eq!(Tone::default(), Tone::Brand);
    assert_eq!(Tone::Brand.modifier(), "brand");
    assert_eq!(Tone::Wine.modifier(), "wine");
}

#[test]
fn button_variant_modifiers_are_distinct() {
    let mods = [
        ButtonVariant::Primary.modifier(),
        ButtonVariant::Secondary.modifier(),
        ButtonVariant::Wine.modifier(),
        ButtonVariant::Ghost.modifier(),
    ];
    for (i, a) in mods.iter().enumerate() {
        for b in &mods[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn variant_class_builds_bem_pair() {
    assert_eq!(variant_class("badge", Tone::Wine.modifier()), "badge badge--wine");
    assert_eq!(variant_class("card", Accent::Top.modifier()), "card card--top");
}

#[test]
fn cn_skips_blank_entries() {
    assert_eq!(cn(&["a", "", "  ", "b c", " d "]), "a b c d");
    assert_eq!(cn(&[]), "");
}
