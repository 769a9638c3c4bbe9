use clap::Parser;

use crate::{key::DEFAULT_MAX_KEY_LEN, store::ContactStore};

/// In-memory phone directory answering contact requests on stdin.
///
/// Each input line is one request, e.g. `GET /contacts/5551234`; each
/// response is written to stdout as `<status> <json>`.
#[derive(Parser, Debug, Clone)]
#[command(name = "phone-directory", version)]
pub struct Config {
    /// Longest phone number accepted, in digits
    #[arg(long, env = "PHONE_DIRECTORY_MAX_KEY_LEN", default_value_t = DEFAULT_MAX_KEY_LEN)]
    pub max_key_len: usize,

    /// Drop trie nodes left unused by a delete
    #[arg(long, env = "PHONE_DIRECTORY_PRUNE_ON_DELETE")]
    pub prune_on_delete: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Config {
    pub fn build_store(&self) -> ContactStore {
        ContactStore::new(self.max_key_len, self.prune_on_delete)
    }
}
