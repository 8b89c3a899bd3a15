//! bcrypt password hashes. The stored form is the standard `$2b$<cost>$...`
//! string, which carries its own salt and cost.

use bcrypt::DEFAULT_COST;

use crate::error::MeowlyError;

#[cfg(not(test))]
const COST: u32 = DEFAULT_COST;
// Lowest cost bcrypt accepts; keeps unit tests fast.
#[cfg(test)]
const COST: u32 = 4;

pub fn hash_password(password: &str) -> Result<String, MeowlyError> {
    bcrypt::hash(password, COST)
        .map_err(|e| MeowlyError::Storage(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored hash. Malformed hashes never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies() {
        let hash = hash_password("kucing-manis").unwrap();
        assert!(hash.starts_with("$2b$04$"));
        assert!(verify_password("kucing-manis", &hash));
        assert!(!verify_password("kucing-galak", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same", &a));
        assert!(verify_password("same", &b));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("x", ""));
        assert!(!verify_password("x", "plain-text"));
        assert!(!verify_password("x", "$2b$04$tooshort"));
        assert!(!verify_password("x", "$9z$04$AAAAAAAAAAAAAAAAAAAAAA"));
        assert!(!verify_password("x", "sha256$10000$AAAA$AAAA"));
    }

    #[test]
    fn test_default_cost_hash_verifies() {
        let hash = bcrypt::hash("kucing-manis", DEFAULT_COST).unwrap();
        assert!(hash.starts_with(&format!("$2b${}$", DEFAULT_COST)));
        assert!(verify_password("kucing-manis", &hash));
    }
}
