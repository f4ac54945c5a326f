use crate::auth::PasswordDigest;
use crate::error::Error;
use crate::post::{self, PostContext, PostOptions};
use crate::transport::Transport;
use serde_derive::Deserialize;

/// Overwrite an existing journal entry. The options must carry the
/// `itemid` of the entry being edited; the server rejects the call
/// otherwise.
pub(crate) async fn edit_event<T>(
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
        super::call(transport, "LJ.XMLRPC.editevent", &data).await?;

    Ok(response.itemid)
}

#[derive(Debug, Copy, Clone, Deserialize)]
struct EventResponse {
    itemid: i64,
}
