use super::*;

#[test]
fn empty_password_is_empty_level() {
    let strength = evaluate("");
    assert_eq!(strength.level, StrengthLevel::Empty);
    assert_eq!(strength.score, 0);
    assert_eq!(strength.unmet().len(), Requirement::ALL.len());
}

#[test]
fn short_plain_password_is_very_weak() {
    let strength = evaluate("abc");
    assert_eq!(strength.score, 0);
    assert_eq!(strength.level, StrengthLevel::VeryWeak);
}

#[test]
fn short_password_is_capped_even_when_varied() {
    let strength = evaluate("Ab1!");
    assert_eq!(strength.score, 1);
    assert_eq!(strength.level, StrengthLevel::Weak);
    assert!(strength.unmet().contains(&Requirement::MinLength));
}

#[test]
fn score_grows_with_each_check() {
    assert_eq!(evaluate("abcdefgh").level, StrengthLevel::Weak);
    assert_eq!(evaluate("Abcdefgh").level, StrengthLevel::Fair);
    assert_eq!(evaluate("Abcdefg1").level, StrengthLevel::Good);
    assert_eq!(evaluate("Abcdefg1!").level, StrengthLevel::Strong);
}

#[test]
fn score_is_capped_at_four() {
    let strength = evaluate("Abcdefg1!xyz");
    assert_eq!(strength.met.len(), 5);
    assert_eq!(strength.score, 4);
    assert_eq!(strength.percent(), 100);
    assert!(strength.unmet().is_empty());
}

#[test]
fn length_counts_characters_not_bytes() {
    // Eight characters, sixteen bytes.
    let strength = evaluate("éééééééé");
    assert!(strength.met.contains(&Requirement::MinLength));
    assert!(!evaluate("éééé").met.contains(&Requirement::MinLength));
}

#[test]
fn whitespace_is_not_a_symbol() {
    assert!(!evaluate("abc defgh").met.contains(&Requirement::Symbol));
    assert!(evaluate("abc-defgh").met.contains(&Requirement::Symbol));
}

#[test]
fn levels_have_labels_and_modifiers() {
    assert_eq!(StrengthLevel::Strong.label(), "Strong");
    assert_eq!(StrengthLevel::VeryWeak.css_modifier(), "very-weak");
    assert_eq!(StrengthLevel::Empty.label(), "");
}
