use serde::Deserialize;

use crate::error::{DirectoryError, DirectoryResult};

const CONTACTS_PATH: &str = "/contacts";

/// A request against the directory, one per API route.
///
/// Field values are carried as received; validation happens in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        phone_number: String,
        contact_name: String,
    },
    Lookup(String),
    List,
    Delete(String),
    Clear,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CreateBody {
    phone_number: Option<String>,
    contact_name: Option<String>,
}

/// Splits off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    match s.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s.trim_start(), ""),
    }
}

impl Command {
    /// Parses `METHOD PATH [JSON BODY]`, e.g.
    /// `POST /contacts {"phoneNumber":"5551234","contactName":"Alice"}`.
    pub fn parse(line: &str) -> DirectoryResult<Self> {
        let (method, rest) = split_word(line.trim());
        let (path, body) = split_word(rest);
        let method = method.to_ascii_uppercase();

        let unknown = || DirectoryError::UnknownRoute {
            method: method.clone(),
            path: path.to_string(),
        };

        let route = path.trim_end_matches('/');
        let segment = match route.strip_prefix(CONTACTS_PATH) {
            Some("") => None,
            Some(rest) => match rest.strip_prefix('/') {
                Some(number) if !number.contains('/') => Some(number),
                _ => return Err(unknown()),
            },
            None => return Err(unknown()),
        };

        let cmd = match (method.as_str(), segment) {
            ("POST", None) => {
                let body: CreateBody = if body.is_empty() {
                    CreateBody::default()
                } else {
                    serde_json::from_str(body)?
                };
                let phone_number = body
                    .phone_number
                    .filter(|s| !s.is_empty())
                    .ok_or(DirectoryError::MissingField("phoneNumber"))?;
                let contact_name = body
                    .contact_name
                    .filter(|s| !s.is_empty())
                    .ok_or(DirectoryError::MissingField("contactName"))?;
                Command::Create {
                    phone_number,
                    contact_name,
                }
            }
            ("GET", None) => Command::List,
            ("GET", Some(number)) => Command::Lookup(number.to_string()),
            ("DELETE", None) => Command::Clear,
            ("DELETE", Some(number)) => Command::Delete(number.to_string()),
            _ => return Err(unknown()),
        };

        Ok(cmd)
    }
}
