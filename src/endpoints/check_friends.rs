use crate::auth::PasswordDigest;
use crate::error::Error;
use crate::transport::Transport;
use serde_derive::{Deserialize, Serialize};

/// Poll the server for friend-list activity newer than `last_update`.
///
/// `mask` restricts the poll to the friend groups whose bits are set.
pub async fn check_friends<T>(
    transport: &T,
    username: &str,
    digest: &PasswordDigest,
    last_update: &str,
    mask: Option<u64>,
) -> Result<CheckFriendsOutcome, Error>
where
    T: Transport + ?Sized,
{
    let auth = super::get_challenge(transport, digest).await?;
    let data = Data {
        username,
        auth_method: "challenge",
        auth_challenge: &auth.challenge,
        auth_response: auth.response.as_hex(),
        lastupdate: last_update,
        mask,
    };

    let response: CheckFriendsResponse =
        super::call(transport, "LJ.XMLRPC.checkfriends", &data).await?;

    Ok(CheckFriendsOutcome {
        new_entries: response.new_entries == 1,
        interval: response.interval,
        last_update: response.lastupdate,
    })
}

/// The cursor and timer updates a checkfriends poll produces.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFriendsOutcome {
    /// The friends list has entries newer than the cursor.
    pub new_entries: bool,
    /// Seconds the server wants the client to wait before polling again.
    pub interval: i64,
    /// The new cursor to send on the next poll.
    pub last_update: String,
}

#[derive(Debug, Copy, Clone, Serialize)]
struct Data<'a> {
    username: &'a str,
    auth_method: &'a str,
    auth_challenge: &'a str,
    auth_response: &'a str,
    lastupdate: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mask: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
struct CheckFriendsResponse {
    #[serde(rename = "new")]
    new_entries: i64,
    interval: i64,
    lastupdate: String,
}
