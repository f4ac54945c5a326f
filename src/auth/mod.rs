//! Challenge/response authentication.

mod challenge_response;
mod password_digest;

const MD5_LEN: usize =
    <<md5::Md5 as digest::FixedOutput>::OutputSize as typenum::marker_traits::Unsigned>::USIZE;

pub use challenge_response::ChallengeResponse;
pub use password_digest::PasswordDigest;

/// A single-use server challenge paired with the digest proving password
/// knowledge. Attached to every authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct Auth {
    pub challenge: String,
    pub response: ChallengeResponse,
}

impl Auth {
    /// Add the challenge/response fields to an outgoing params map.
    pub(crate) fn apply(&self, params: &mut serde_json::Map<String, serde_json::Value>) {
        params.insert(
            "auth_challenge".to_string(),
            serde_json::Value::from(self.challenge.as_str()),
        );
        params.insert(
            "auth_response".to_string(),
            serde_json::Value::from(self.response.as_hex()),
        );
    }
}
