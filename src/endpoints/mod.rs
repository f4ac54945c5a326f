//! The LiveJournal API's XML-RPC methods.
//!
//! Each method is a free function taking the [`Transport`] by reference.
//! Functions that change session state return plain outcome structs; the
//! [`Session`][crate::Session] applies them.

mod check_friends;
mod edit_event;
mod get_challenge;
mod login;
mod post_event;

pub use check_friends::{check_friends, CheckFriendsOutcome};
pub use get_challenge::get_challenge;
pub use login::{login, LoginOutcome};

pub(crate) use edit_event::edit_event;
pub(crate) use post_event::post_event;

use crate::error::Error;
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

/// Dispatch one method call: serialize the payload, hand it to the
/// transport, translate faults, decode the response.
pub(crate) async fn call<T, D, R>(
    transport: &T,
    method: &str,
    data: &D,
) -> Result<R, Error>
where
    T: Transport + ?Sized,
    D: Debug + Serialize,
    R: DeserializeOwned,
{
    log::debug!("Calling {}", method);
    log::trace!("Payload: {:#?}", data);

    let params = match serde_json::to_value(data)? {
        Value::Object(map) => map,
        _ => unreachable!("request payloads always serialize to structs"),
    };

    let response = transport.call(method, params).await?;
    log::trace!("Response: {:#?}", response);

    serde_json::from_value(Value::Object(response)).map_err(Error::from)
}
