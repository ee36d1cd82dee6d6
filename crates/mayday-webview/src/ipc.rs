//! IPC (Inter-Process Communication) protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.mayday.ipc.send(kind, payload)`,
//!   which posts `{"kind": ..., "payload": ...}` to the `ipc_handler`
//!   registered on the WebView.
//! - **Rust -> JS**: Rust evaluates `window.mayday.ipc._dispatch(kind, payload)`
//!   in the WebView context.

use serde::Deserialize;

/// A typed IPC message from JavaScript to Rust.
///
/// Only the kind is read. Inbound kinds carry no payload, so whatever the
/// page attaches is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// This is injected as an initialization script into every WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // Mayday IPC bridge
    window.mayday = window.mayday || {};
    window.mayday.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        // Callbacks registered by JS code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.mayday.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message_with_null_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"content-ready","payload":null}"#).unwrap();
        assert_eq!(msg.kind, "content-ready");
    }

    #[test]
    fn parse_message_without_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"content-quit-requested"}"#).unwrap();
        assert_eq!(msg.kind, "content-quit-requested");
    }

    #[test]
    fn payload_is_ignored() {
        let msg = IpcMessage::from_json(r#"{"kind":"content-ready","payload":{"x":1}}"#).unwrap();
        assert_eq!(msg.kind, "content-ready");
    }

    #[test]
    fn reject_garbage() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
        assert!(IpcMessage::from_json(r#"{"kind":7}"#).is_none());
    }

    #[test]
    fn dispatch_script_quotes_kind_and_payload() {
        let script = js_dispatch_message(
            "error-report",
            &serde_json::json!({"error": {"message": "it's \"bad\""}}),
        );
        assert!(script.starts_with("window.mayday.ipc._dispatch(\"error-report\", "));
        assert!(script.contains(r#"\"bad\""#));
        assert!(script.ends_with(");"));
    }

    #[test]
    fn dispatch_script_escapes_hostile_kind() {
        let script = js_dispatch_message("\"); alert(1); (\"", &serde_json::Value::Null);
        assert!(script.contains(r#"\"); alert(1); (\""#));
    }

    #[test]
    fn init_script_defines_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.mayday.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("_dispatch"));
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
    }
}
