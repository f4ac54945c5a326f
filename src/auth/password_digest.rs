use digest::{Digest, FixedOutput};
use md5::Md5;
use std::{
    fmt::{self, Debug, Formatter},
    ops::Deref,
};

/// The hex-encoded MD5 digest of the account password.
///
/// This is the only credential material the session keeps after login;
/// the raw password is hashed once and dropped.
#[derive(Copy, Clone)]
pub struct PasswordDigest([u8; PasswordDigest::LEN]);

impl PasswordDigest {
    pub const LEN: usize = crate::auth::MD5_LEN * 2;

    pub fn calculate(password: &str) -> Self {
        let digest = Md5::new().chain(password).fixed_result();

        PasswordDigest::from_hex(&digest)
    }

    pub fn as_hex(&self) -> &str {
        std::str::from_utf8(&self.0)
            .expect("The calculation process ensures this is a hex string")
    }

    fn from_hex(bytes: &[u8]) -> Self {
        let hash = hex::encode(bytes);

        assert_eq!(hash.len(), PasswordDigest::LEN);
        let mut digest = [0; PasswordDigest::LEN];

        for (i, byte) in hash.bytes().enumerate() {
            digest[i] = byte;
        }

        PasswordDigest(digest)
    }
}

impl Deref for PasswordDigest {
    type Target = [u8];

    fn deref(&self) -> &[u8] { &self.0 }
}

impl AsRef<[u8]> for PasswordDigest {
    fn as_ref(&self) -> &[u8] { self.deref() }
}

impl PartialEq for PasswordDigest {
    fn eq(&self, other: &PasswordDigest) -> bool { self.0[..] == other.0[..] }
}

impl Debug for PasswordDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordDigest").field(&self.as_hex()).finish()
    }
}
