use bcrypt::{DEFAULT_COST, hash, verify};

/// bcrypt cost used for security answers unless a service overrides it.
pub const ANSWER_HASH_COST: u32 = DEFAULT_COST;

/// Answers are compared case-insensitively and without surrounding whitespace.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Hashes the normalized form of a security answer.
pub fn hash_answer(answer: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(normalize_answer(answer), cost)
}

/// Checks a supplied answer against a stored hash.
pub fn verify_answer(answer: &str, answer_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(normalize_answer(answer), answer_hash)
}
