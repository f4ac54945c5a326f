//! An unofficial interface to the LiveJournal XML-RPC API.
//!
//! This crate speaks the challenge/response dialect of the LiveJournal
//! protocol: it logs in, posts and edits journal entries, and polls for
//! friend-list updates. The XML-RPC wire format itself is left to a
//! [`Transport`] implementation supplied by the caller.

#![forbid(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod auth;
pub mod endpoints;
mod error;
mod friends;
mod moods;
mod post;
mod session;
mod transport;
mod utils;

pub use auth::{Auth, ChallengeResponse, PasswordDigest};
pub use error::Error;
pub use friends::FriendGroup;
pub use moods::{Mood, MoodList};
pub use post::PostOptions;
pub use session::Session;
pub use transport::{Fault, Transport, XMLRPC_PATH};

/// The client identifier sent to the server on login.
pub const CLIENT_VERSION: &str =
    concat!("Rust-", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
