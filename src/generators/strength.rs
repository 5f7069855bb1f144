use crate::models::Strength;

/// Classify a password by how many of four predicates it satisfies:
/// at least 8 characters, an uppercase letter, a digit, and a character
/// outside `[A-Za-z0-9]`.
///
/// This is a display hint only.
pub fn analyze_strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::None;
    }

    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    match score {
        4 => Strength::VeryStrong,
        3 => Strength::Strong,
        2 => Strength::Medium,
        1 => Strength::Weak,
        _ => Strength::VeryWeak,
    }
}
