use crate::params::InputFile;
use crate::types::{Update, WebhookInfo};

remote_call! {
    /// Receive incoming updates using long polling.
    ///
    /// An update is confirmed as soon as `getUpdates` is called with an
    /// `offset` higher than its `update_id`.
    GetUpdates("getUpdates") -> Vec<Update> {
        required {}
        optional {
            offset: i64,
            /// 1-100, defaults to 100.
            limit: i32,
            /// Long polling timeout in seconds. 0 means short polling.
            timeout: i32,
            allowed_updates: Vec<String>,
        }
    }
}

remote_call! {
    /// Specify a URL to receive incoming updates via an outgoing webhook.
    SetWebhook("setWebhook") -> bool {
        required {
            url: String,
        }
        optional {
            /// Public key certificate, uploaded so the root certificate can be checked.
            certificate: InputFile,
            ip_address: String,
            max_connections: i32,
            allowed_updates: Vec<String>,
            drop_pending_updates: bool,
        }
    }
}

remote_call! {
    /// Remove the webhook integration to switch back to `getUpdates`.
    DeleteWebhook("deleteWebhook") -> bool {
        required {}
        optional {
            drop_pending_updates: bool,
        }
    }
}

remote_call! {
    GetWebhookInfo("getWebhookInfo") -> WebhookInfo {
        required {}
        optional {}
    }
}
