use cropwise_core::metrics::PasswordStrength;

/// `"Strength: 4/5 (Strong)"`
pub fn describe(password: &str) -> String {
    let strength = PasswordStrength::of(password);
    format!("Strength: {}/5 ({})", strength.strength, strength.label.text())
}

pub fn run_strength(password: &str) {
    println!("{}", describe(password));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_weak_and_strong_passwords() {
        assert_eq!(describe(""), "Strength: 0/5 (Very Weak)");
        assert_eq!(describe("Abc12345!"), "Strength: 5/5 (Very Strong)");
    }
}
