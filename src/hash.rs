use ::core::hash::BuildHasher;
use rustc_hash::FxBuildHasher;

/// Fixed-width key a token is reduced to before being stored anywhere.
///
/// Distinct tokens are assumed, not guaranteed, to hash distinctly: a
/// collision silently merges two tokens into one model entry. The token
/// string itself is never retained past this point.
pub type TokenHash = u64;

/// Hashes a token for both the training and the query path.
///
/// Pure and deterministic: the same token always maps to the same trie path
/// and unigram table entry, across calls and across processes.
#[inline]
pub(crate) fn hash_token(token: &str) -> TokenHash {
    FxBuildHasher.hash_one(token)
}

#[cfg(test)]
mod tests {
    use super::hash_token;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(hash_token("token"), hash_token("token"));
        assert_eq!(hash_token("token"), hash_token(String::from("token").as_str()));
    }

    #[test]
    fn test_hash_distinguishes_case() {
        assert_ne!(hash_token("Token"), hash_token("token"));
        assert_ne!(hash_token(""), hash_token(" "));
    }
}
