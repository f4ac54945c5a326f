use crate::auth::PasswordDigest;
use crate::error::Error;
use crate::post::{self, PostContext, PostOptions};
use crate::transport::Transport;
use serde_derive::Deserialize;

/// Create a new journal entry and return its item id.
pub(crate) async fn post_event<T>(
    transport: &T,
    ctx: &PostContext<'_>,
    digest: &PasswordDigest,
    event: &str,
    options: &PostOptions,
) -> Result<i64, Error>
where
    T: Transport + ?Sized,
{
    let mut data = post::build_event(ctx, event, options)?;
    let auth = super::get_challenge(transport, digest).await?;
    auth.apply(&mut data);

    let response: EventResponse =
        super::call(transport, "LJ.XMLRPC.postevent", &data).await?;

    Ok(response.itemid)
}

#[derive(Debug, Copy, Clone, Deserialize)]
struct EventResponse {
    itemid: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn posted_item_id_is_returned() {
        let transport = MockTransport::with_challenge();
        transport.push_response(json!({ "itemid": 123, "anum": 57, "url": "x" }));
        let digest = PasswordDigest::calculate("password");
        let journals = vec![String::from("frank")];
        let ctx = PostContext {
            username: "frank",
            use_journals: &journals,
            friend_groups: &[],
        };

        let got = post_event(&transport, &ctx, &digest, "hello", &PostOptions::default())
            .await
            .unwrap();

        assert_eq!(got, 123);
        let (method, params) = transport.last_call();
        assert_eq!(method, "LJ.XMLRPC.postevent");
        assert_eq!(params["event"], json!("hello"));
        assert_eq!(params["auth_challenge"], json!("c0:0:0:0:fake:0"));
        assert!(params["auth_response"].is_string());
    }

    #[tokio::test]
    async fn local_validation_stops_before_any_call() {
        let transport = MockTransport::with_challenge();
        let digest = PasswordDigest::calculate("password");
        let ctx = PostContext {
            username: "frank",
            use_journals: &[],
            friend_groups: &[],
        };
        let options = PostOptions {
            journal: Some(String::from("somebody_else")),
            ..PostOptions::default()
        };

        let err = post_event(&transport, &ctx, &digest, "hello", &options)
            .await
            .unwrap_err();

        assert_eq!(err.code(), 103);
        assert_eq!(transport.call_count(), 0);
    }
}
