use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

pub fn hash(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("argon2 hash: {e}"))?
        .to_string();
    Ok(hash)
}

pub fn verify(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("argon2 parse hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hashed = hash("hunter2").expect("hashing should succeed");
        assert!(verify("hunter2", &hashed).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hashed = hash("correct-horse-battery-staple").expect("hashing should succeed");
        assert!(!verify("wrong-password", &hashed).expect("verify should not error"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash("same-password").expect("hashing should succeed");
        let b = hash("same-password").expect("hashing should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify("anything", "not-a-phc-string").is_err());
    }
}
