use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

const SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";
/// Minimum strength score accepted at registration.
pub const MIN_STRENGTH: u8 = 50;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Strength score in steps of 25, one per satisfied rule, with the unmet
/// rules spelled out for the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub unmet: Vec<&'static str>,
}

pub fn strength(password: &str) -> Strength {
    let rules: [(bool, &'static str); 4] = [
        (
            password.chars().count() >= 8,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Include at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Include at least one number",
        ),
        (
            password.chars().any(|c| SPECIALS.contains(c)),
            "Include at least one special character",
        ),
    ];
    Strength {
        score: rules.iter().filter(|(met, _)| *met).count() as u8 * 25,
        unmet: rules
            .iter()
            .filter(|(met, _)| !*met)
            .map(|(_, rule)| *rule)
            .collect(),
    }
}
