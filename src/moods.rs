use serde_derive::Deserialize;

/// One entry in the server's mood vocabulary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mood {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub parent: u32,
}

/// Whether, and how, the session syncs the server's mood list at login.
///
/// The list changes rarely, so the protocol supports incremental sync:
/// the client sends the highest mood id it has cached and receives only
/// the newer entries.
#[derive(Debug, Clone, PartialEq)]
pub enum MoodList {
    /// Don't ask the server for moods at all.
    NotRequested,
    /// Download the full list on the next login.
    RequestFull,
    /// A previously downloaded list; the next login fetches only moods
    /// with higher ids.
    Cached(Vec<Mood>),
}

impl MoodList {
    /// The `getmoods` cursor for the next login call, or `None` when no
    /// mood sync was requested.
    pub(crate) fn sync_cursor(&self) -> Option<u32> {
        match self {
            MoodList::NotRequested => None,
            MoodList::RequestFull => Some(0),
            MoodList::Cached(moods) => {
                Some(moods.iter().map(|mood| mood.id).max().unwrap_or(0))
            },
        }
    }

    /// Fold the moods returned by a login into the cached state.
    pub(crate) fn merge(&mut self, fetched: Vec<Mood>) {
        match self {
            MoodList::NotRequested => {},
            MoodList::RequestFull => *self = MoodList::Cached(fetched),
            MoodList::Cached(moods) => moods.extend(fetched),
        }
    }

    /// The cached moods, if any were downloaded or loaded.
    pub fn moods(&self) -> Option<&[Mood]> {
        match self {
            MoodList::Cached(moods) => Some(moods),
            _ => None,
        }
    }
}

impl Default for MoodList {
    fn default() -> MoodList { MoodList::NotRequested }
}
