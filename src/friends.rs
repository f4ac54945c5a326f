use crate::error::Error;
use serde_derive::Deserialize;

/// A friend group defined by the logged-in user.
///
/// Groups arrive with the login response and are replaced wholesale on
/// every login. The server-assigned `id` doubles as a bit position in
/// post allow-masks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FriendGroup {
    pub name: String,
    pub id: u32,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub public: bool,
    #[serde(rename = "sortorder", default)]
    pub sort_order: i32,
}

/// The wire format uses 0/1 integers where this library wants booleans.
fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let n: i64 = serde::Deserialize::deserialize(deserializer)?;
    Ok(n != 0)
}

/// Convert a whitespace-separated list of group names into the server's
/// allow-mask. Each group contributes `2^id`; an unknown name fails with
/// [`Error::BadFriendGroup`] before anything is sent to the server.
///
/// Group ids are assumed distinct. A duplicated id is not rejected and
/// adds its bit twice, exactly like older client libraries.
pub(crate) fn group_mask(
    groups: &str,
    friend_groups: &[FriendGroup],
) -> Result<u64, Error> {
    let mut mask = 0;

    for name in groups.split_whitespace() {
        let selected = friend_groups
            .iter()
            .find(|group| group.name == name)
            .ok_or_else(|| Error::BadFriendGroup(name.to_string()))?;
        mask += 1u64 << selected.id;
    }

    Ok(mask)
}
