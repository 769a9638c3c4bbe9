use std::fmt;

use serde::Serialize;

use crate::{directory::Contact, error::DirectoryError};

/// Returned as the contact name when a lookup misses.
pub const NOT_FOUND_NAME: &str = "Number not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Created,
    BadRequest,
    NotFound,
}

impl Status {
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::BadRequest => 400,
            Status::NotFound => 404,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Message {
        message: String,
    },
    ContactName {
        #[serde(rename = "contactName")]
        contact_name: String,
    },
    Contacts(Vec<Contact>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub body: Body,
}

impl Response {
    fn message(status: Status, message: &str) -> Self {
        Self {
            status,
            body: Body::Message {
                message: message.into(),
            },
        }
    }

    pub fn created() -> Self {
        Self::message(Status::Created, "Contact added")
    }

    /// A lookup always succeeds; a miss carries [`NOT_FOUND_NAME`].
    pub fn contact_name(name: Option<String>) -> Self {
        Self {
            status: Status::Ok,
            body: Body::ContactName {
                contact_name: name.unwrap_or_else(|| NOT_FOUND_NAME.to_string()),
            },
        }
    }

    pub fn contacts(contacts: Vec<Contact>) -> Self {
        Self {
            status: Status::Ok,
            body: Body::Contacts(contacts),
        }
    }

    pub fn deleted(found: bool) -> Self {
        match found {
            true => Self::message(Status::Ok, "Contact deleted"),
            false => Self::message(Status::NotFound, NOT_FOUND_NAME),
        }
    }

    pub fn cleared() -> Self {
        Self::message(Status::Ok, "All contacts have been deleted")
    }

    pub fn from_error(err: &DirectoryError) -> Self {
        match err {
            DirectoryError::MissingField(_) => Self::message(
                Status::BadRequest,
                "Phone number and contact name are required",
            ),
            e if e.is_bad_request() => Self::message(Status::BadRequest, &e.to_string()),
            e => Self::message(Status::NotFound, &e.to_string()),
        }
    }

    /// `<code> <json>`, without a trailing newline.
    pub fn to_line(&self) -> serde_json::Result<String> {
        Ok(format!("{} {}", self.status, serde_json::to_string(&self.body)?))
    }
}
