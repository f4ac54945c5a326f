use crate::auth::PasswordDigest;
use crate::endpoints;
use crate::error::Error;
use crate::friends::{self, FriendGroup};
use crate::moods::{Mood, MoodList};
use crate::post::{PostContext, PostOptions};
use crate::transport::Transport;
use chrono::Utc;

/// A stateful connection to a LiveJournal-compatible server.
///
/// A session starts logged out; [`login`][Session::login] fills in the
/// journal list, friend groups and fast-server flag, and every other
/// operation requires it to have succeeded first. A `Session` is not
/// synchronized; share it across tasks only behind a lock.
pub struct Session<T> {
    transport: T,
    host: String,
    username: String,
    digest: Option<PasswordDigest>,
    logged_in: bool,
    fast_server: bool,
    use_journals: Vec<String>,
    friend_groups: Vec<FriendGroup>,
    message: Option<String>,
    moods: MoodList,
    last_update: String,
    next_check_ok: i64,
}

impl<T: Transport> Session<T> {
    /// Create a logged-out session.
    ///
    /// `host` is a bare fully-qualified domain name (i.e.
    /// `"www.livejournal.com"`), not a URL; the transport reaches the
    /// server at that host under [`XMLRPC_PATH`][crate::XMLRPC_PATH].
    pub fn new(host: impl Into<String>, transport: T) -> Self {
        Session {
            transport,
            host: host.into(),
            username: String::new(),
            digest: None,
            logged_in: false,
            fast_server: false,
            use_journals: Vec::new(),
            friend_groups: Vec::new(),
            message: None,
            moods: MoodList::NotRequested,
            last_update: String::new(),
            next_check_ok: 0,
        }
    }

    /// Log into the server.
    ///
    /// Returns `true` when the server sent back a human-readable notice,
    /// readable via [`message`][Session::message]. To sync the mood
    /// vocabulary during login, call [`request_moods`][Session::request_moods]
    /// or [`load_moods`][Session::load_moods] first.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<bool, Error> {
        let digest = PasswordDigest::calculate(password);
        let outcome = endpoints::login(
            &self.transport,
            username,
            &digest,
            self.moods.sync_cursor(),
        )
        .await?;

        self.username = username.to_string();
        self.digest = Some(digest);
        self.fast_server = outcome.fast_server;
        self.use_journals = outcome.use_journals;
        self.friend_groups = outcome.friend_groups;
        self.next_check_ok = 0;
        self.moods.merge(outcome.moods);
        self.message = outcome.message;
        self.logged_in = true;

        Ok(self.message.is_some())
    }

    /// Post a new entry and return its item id.
    pub async fn post_event(
        &self,
        event: &str,
        options: &PostOptions,
    ) -> Result<i64, Error> {
        let digest = self.credentials()?;
        self.hint_fast_server();

        let ctx = self.post_context();
        endpoints::post_event(&self.transport, &ctx, &digest, event, options).await
    }

    /// Edit an existing entry and return its item id. The options must
    /// carry the entry's `itemid`.
    pub async fn edit_event(
        &self,
        event: &str,
        options: &PostOptions,
    ) -> Result<i64, Error> {
        let digest = self.credentials()?;
        self.hint_fast_server();

        let ctx = self.post_context();
        endpoints::edit_event(&self.transport, &ctx, &digest, event, options).await
    }

    /// Poll for friends-list updates, optionally restricted to a
    /// whitespace-separated list of friend-group names.
    ///
    /// The server dictates how often it may be polled; calling again
    /// before [`next_check_ok`][Session::next_check_ok] fails with
    /// [`Error::CheckInterval`] without touching the network.
    pub async fn check_friends(
        &mut self,
        groups: Option<&str>,
    ) -> Result<bool, Error> {
        let digest = self.credentials()?;

        if Utc::now().timestamp() < self.next_check_ok {
            return Err(Error::CheckInterval);
        }

        let mask = match groups {
            Some(groups) => Some(friends::group_mask(groups, &self.friend_groups)?),
            None => None,
        };

        let outcome = endpoints::check_friends(
            &self.transport,
            &self.username,
            &digest,
            &self.last_update,
            mask,
        )
        .await?;

        self.last_update = outcome.last_update;
        self.next_check_ok = Utc::now().timestamp() + outcome.interval;

        Ok(outcome.new_entries)
    }

    /// Download the full mood list on the next login.
    pub fn request_moods(&mut self) {
        self.moods = MoodList::RequestFull;
    }

    /// Seed the mood list from a cache the caller persisted; the next
    /// login fetches only moods newer than the highest cached id.
    pub fn load_moods(&mut self, moods: Vec<Mood>) {
        self.moods = MoodList::Cached(moods);
    }

    /// The mood list, once downloaded or loaded.
    pub fn moods(&self) -> Option<&[Mood]> {
        self.moods.moods()
    }

    /// The host this session talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether a login has succeeded.
    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// Whether the account may use the fast server pool.
    pub fn fast_server(&self) -> bool {
        self.fast_server
    }

    /// Journals the logged-in user can post to.
    pub fn use_journals(&self) -> &[String] {
        &self.use_journals
    }

    /// The logged-in user's friend groups.
    pub fn friend_groups(&self) -> &[FriendGroup] {
        &self.friend_groups
    }

    /// The notice the server sent with the last login, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Earliest unix time the next [`check_friends`][Session::check_friends]
    /// call is allowed.
    pub fn next_check_ok(&self) -> i64 {
        self.next_check_ok
    }

    fn credentials(&self) -> Result<PasswordDigest, Error> {
        if !self.logged_in {
            return Err(Error::NotLoggedIn);
        }

        // set together with logged_in
        Ok(self.digest.expect("logged in without credentials"))
    }

    fn post_context(&self) -> PostContext<'_> {
        PostContext {
            username: &self.username,
            use_journals: &self.use_journals,
            friend_groups: &self.friend_groups,
        }
    }

    fn hint_fast_server(&self) {
        if self.fast_server {
            self.transport.set_affinity("ljfastserver=1");
        }
    }
}
