use crate::auth::PasswordDigest;
use crate::error::Error;
use crate::friends::FriendGroup;
use crate::moods::Mood;
use crate::transport::Transport;
use serde_derive::{Deserialize, Serialize};

/// Authenticate with the server.
///
/// `mood_cursor` is the incremental mood-sync cursor: `Some(0)` requests
/// the full mood list, `Some(id)` requests moods newer than `id`, `None`
/// skips moods entirely.
pub async fn login<T>(
    transport: &T,
    username: &str,
    digest: &PasswordDigest,
    mood_cursor: Option<u32>,
) -> Result<LoginOutcome, Error>
where
    T: Transport + ?Sized,
{
    let auth = super::get_challenge(transport, digest).await?;
    let data = Data {
        username,
        clientversion: crate::CLIENT_VERSION,
        auth_method: "challenge",
        auth_challenge: &auth.challenge,
        auth_response: auth.response.as_hex(),
        getmoods: mood_cursor,
    };

    let response: LoginResponse =
        super::call(transport, "LJ.XMLRPC.login", &data).await?;

    log::info!("Logged in as {}", username);

    Ok(LoginOutcome::from(response))
}

/// The session-state changes a successful login produces.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    /// The account may use the fast server pool.
    pub fast_server: bool,
    /// Journals the user can post to, the user's own included.
    pub use_journals: Vec<String>,
    /// The user's friend groups, replacing any previous set.
    pub friend_groups: Vec<FriendGroup>,
    /// Moods newer than the sync cursor (the full list for cursor 0).
    pub moods: Vec<Mood>,
    /// A human-readable notice from the server, if it sent one.
    pub message: Option<String>,
}

#[derive(Debug, Copy, Clone, Serialize)]
struct Data<'a> {
    username: &'a str,
    clientversion: &'a str,
    auth_method: &'a str,
    auth_challenge: &'a str,
    auth_response: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    getmoods: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    fastserver: Option<i64>,
    #[serde(default)]
    usejournals: Vec<String>,
    #[serde(default)]
    friendgroups: Vec<FriendGroup>,
    #[serde(default)]
    moods: Vec<Mood>,
    #[serde(default)]
    message: Option<String>,
}

impl From<LoginResponse> for LoginOutcome {
    fn from(response: LoginResponse) -> LoginOutcome {
        LoginOutcome {
            fast_server: response.fastserver == Some(1),
            use_journals: response.usejournals,
            friend_groups: response.friendgroups,
            moods: response.moods,
            message: response.message,
        }
    }
}
