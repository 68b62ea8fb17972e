//! Section passcode generation.

use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random uppercase-alphanumeric passcode of the given length.
pub fn generate(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(generate(6).len(), 6);
        assert_eq!(generate(10).len(), 10);
        assert!(generate(0).is_empty());
    }

    #[test]
    fn test_charset() {
        for _ in 0..100 {
            let code = generate(6);
            assert!(code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }
}
