use crate::auth::{Auth, ChallengeResponse, PasswordDigest};
use crate::error::Error;
use crate::transport::Transport;
use serde_derive::{Deserialize, Serialize};

/// Fetch a single-use challenge from the server and compute the digest
/// that answers it. Every authenticated call burns one challenge.
pub async fn get_challenge<T>(
    transport: &T,
    digest: &PasswordDigest,
) -> Result<Auth, Error>
where
    T: Transport + ?Sized,
{
    let data = Data {};
    let doc: ChallengeDocument =
        super::call(transport, "LJ.XMLRPC.getchallenge", &data).await?;

    let response = ChallengeResponse::calculate(&doc.challenge, digest);

    Ok(Auth {
        challenge: doc.challenge,
        response,
    })
}

#[derive(Debug, Copy, Clone, Serialize)]
struct Data {}

#[derive(Debug, Clone, Deserialize)]
struct ChallengeDocument {
    challenge: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn challenge_and_response_pair() {
        let transport = MockTransport::new();
        transport.push_response(json!({
            "challenge": "c0:1073113200:2831:60:2TCbFBYR72f2jhVDuowz:0",
            "expire_time": 1_073_113_260,
            "server_time": 1_073_113_200,
            "auth_scheme": "c0"
        }));
        let digest = PasswordDigest::calculate("password");

        let got = get_challenge(&transport, &digest).await.unwrap();

        assert_eq!(got.challenge, "c0:1073113200:2831:60:2TCbFBYR72f2jhVDuowz:0");
        assert_eq!(got.response.as_hex(), "f5dd9972af016e62ad106454530a56ff");
        let (method, params) = transport.last_call();
        assert_eq!(method, "LJ.XMLRPC.getchallenge");
        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn fault_becomes_a_server_fault() {
        let transport = MockTransport::new();
        transport.push_fault(500, "challenge generation failed");
        let digest = PasswordDigest::calculate("password");

        let err = get_challenge(&transport, &digest).await.unwrap_err();

        assert_eq!(err.code(), 500);
        assert_eq!(err.to_string(), "server fault 500: challenge generation failed");
    }
}
