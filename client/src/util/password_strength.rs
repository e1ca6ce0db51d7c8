//! Password strength heuristic for the signup form meter.
//!
//! Five checks contribute one point each, capped at four. Passwords shorter
//! than the minimum never score above one regardless of character variety.

#[cfg(test)]
#[path = "password_strength_test.rs"]
mod password_strength_test;

pub const MIN_LENGTH: usize = 8;
pub const LONG_LENGTH: usize = 12;
const MAX_SCORE: u8 = 4;

/// One rule the meter checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    MinLength,
    MixedCase,
    Digit,
    Symbol,
    LongLength,
}

impl Requirement {
    pub const ALL: [Self; 5] = [Self::MinLength, Self::MixedCase, Self::Digit, Self::Symbol, Self::LongLength];

    pub const fn hint(self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::MixedCase => "Upper and lower case letters",
            Self::Digit => "At least one number",
            Self::Symbol => "At least one symbol",
            Self::LongLength => "12 or more characters",
        }
    }

    fn is_met(self, password: &str, length: usize) -> bool {
        match self {
            Self::MinLength => length >= MIN_LENGTH,
            Self::MixedCase => {
                password.chars().any(char::is_lowercase) && password.chars().any(char::is_uppercase)
            }
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Symbol => password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
            Self::LongLength => length >= LONG_LENGTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Empty,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    pub const fn css_modifier(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::VeryWeak => "very-weak",
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
    pub met: Vec<Requirement>,
}

impl PasswordStrength {
    /// Requirements still missing, in display order.
    pub fn unmet(&self) -> Vec<Requirement> {
        Requirement::ALL.into_iter().filter(|r| !self.met.contains(r)).collect()
    }

    /// Meter fill, 0-100.
    pub fn percent(&self) -> u8 {
        self.score * 25
    }
}

pub fn evaluate(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength { score: 0, level: StrengthLevel::Empty, met: Vec::new() };
    }

    let length = password.chars().count();
    let met: Vec<Requirement> = Requirement::ALL
        .into_iter()
        .filter(|r| r.is_met(password, length))
        .collect();

    let mut score = u8::try_from(met.len()).unwrap_or(MAX_SCORE).min(MAX_SCORE);
    if length < MIN_LENGTH {
        score = score.min(1);
    }

    PasswordStrength { score, level: StrengthLevel::from_score(score), met }
}
