use async_trait::async_trait;
use serde_json::{Map, Value};

/// The path every LiveJournal-compatible server exposes its XML-RPC
/// interface on. [`Transport`] implementations append this to the bare
/// host name handed to [`Session::new`][crate::Session::new].
pub const XMLRPC_PATH: &str = "/interface/xmlrpc";

/// A remote fault returned by the server for an XML-RPC call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("server fault {}: {}", code, message)]
pub struct Fault {
    /// The server's numeric fault code.
    pub code: i32,
    /// The server's human-readable fault string.
    pub message: String,
}

/// The XML-RPC transport this library sends its requests through.
///
/// Implementations own the wire format: they marshal the params map into
/// an XML-RPC `methodCall`, POST it to `https://{host}{XMLRPC_PATH}`, and
/// unmarshal the response struct. A `methodResponse` carrying a fault
/// must surface as [`Fault`], not as a transport-specific error.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invoke one XML-RPC method and return the response struct.
    async fn call(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>, Fault>;

    /// Hint that subsequent calls should stick to the backend the given
    /// cookie selects. Advisory; the default implementation ignores it.
    fn set_affinity(&self, _cookie: &str) {}
}
