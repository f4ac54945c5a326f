use crate::auth::PasswordDigest;
use digest::{Digest, FixedOutput};
use md5::Md5;
use std::{
    fmt::{self, Debug, Formatter},
    ops::Deref,
};

/// The hex-encoded response digest for a server-issued challenge.
#[derive(Copy, Clone)]
pub struct ChallengeResponse([u8; ChallengeResponse::LEN]);

impl ChallengeResponse {
    pub const LEN: usize = crate::auth::MD5_LEN * 2;

    /// Compute the response to a challenge: the MD5 of the challenge
    /// string concatenated with the hex MD5 of the password. The server
    /// verifies this exact construction.
    pub fn calculate(challenge: &str, digest: &PasswordDigest) -> Self {
        let response = Md5::new()
            .chain(challenge)
            .chain(digest.as_hex())
            .fixed_result();

        ChallengeResponse::from_hex(&response)
    }

    pub fn as_hex(&self) -> &str {
        std::str::from_utf8(&self.0)
            .expect("The calculation process ensures this is a hex string")
    }

    fn from_hex(bytes: &[u8]) -> Self {
        let hash = hex::encode(bytes);

        assert_eq!(hash.len(), ChallengeResponse::LEN);
        let mut response = [0; ChallengeResponse::LEN];

        for (i, byte) in hash.bytes().enumerate() {
            response[i] = byte;
        }

        ChallengeResponse(response)
    }
}

impl Deref for ChallengeResponse {
    type Target = [u8];

    fn deref(&self) -> &[u8] { &self.0 }
}

impl AsRef<[u8]> for ChallengeResponse {
    fn as_ref(&self) -> &[u8] { self.deref() }
}

impl PartialEq for ChallengeResponse {
    fn eq(&self, other: &ChallengeResponse) -> bool { self.0[..] == other.0[..] }
}

impl Debug for ChallengeResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChallengeResponse")
            .field(&self.as_hex())
            .finish()
    }
}
