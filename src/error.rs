use crate::transport::Fault;

/// Any error raised by this library.
///
/// Remote faults are carried verbatim in [`Error::ServerFault`]; every
/// other variant is detected locally, before a network call is made. The
/// numeric codes reported by [`Error::code`] match the ones LiveJournal
/// client libraries have used historically.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An authenticated operation was attempted before a successful login.
    #[error("not logged in")]
    NotLoggedIn,
    /// `checkfriends` was called again before the server-specified
    /// interval elapsed.
    #[error("checkfriends interval has not elapsed")]
    CheckInterval,
    /// The journal name is not one the logged-in user can post to.
    #[error("invalid journal name '{}'", _0)]
    InvalidJournal(String),
    /// The screening argument is not a recognized token.
    #[error("screening must be 'all', 'none', 'anonymous' or 'non-friends', not '{}'", _0)]
    BadScreening(String),
    /// A named friend group does not exist for the logged-in user.
    #[error("invalid friends group '{}'", _0)]
    BadFriendGroup(String),
    /// The server answered a call with an XML-RPC fault.
    #[error("server fault {}: {}", code, message)]
    ServerFault { code: i32, message: String },
    /// The server's response could not be decoded.
    #[error("unable to parse the server response")]
    ResponseParse(
        #[source]
        #[from]
        serde_json::Error,
    ),
}

impl Error {
    /// The numeric error code. Local validation errors use the fixed
    /// codes 101-105, remote faults report the server's own code, and
    /// undecodable responses report 0.
    pub fn code(&self) -> i32 {
        match self {
            Error::NotLoggedIn => 101,
            Error::CheckInterval => 102,
            Error::InvalidJournal(_) => 103,
            Error::BadScreening(_) => 104,
            Error::BadFriendGroup(_) => 105,
            Error::ServerFault { code, .. } => *code,
            Error::ResponseParse(_) => 0,
        }
    }
}

impl From<Fault> for Error {
    fn from(fault: Fault) -> Error {
        Error::ServerFault {
            code: fault.code,
            message: fault.message,
        }
    }
}
