use chrono::Utc;
use md5::{Digest, Md5};
use uuid::Uuid;

/// 32 hex chars from the current time and 128 random bits.
///
/// Nothing is remembered; every challenge stands alone.
pub fn generate_nonce() -> String {
    let timestamp = Utc::now().timestamp_micros();
    let random = Uuid::new_v4().to_simple().to_string();
    hex::encode(Md5::digest(format!("{timestamp}{random}").as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_is_fixed_length_hex() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), 32);
        assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn consecutive_nonces_differ() {
        assert_ne!(generate_nonce(), generate_nonce());
    }
}
