pub mod command;
pub mod config;
pub mod directory;
pub mod error;
pub mod handler;
pub mod key;
pub mod response;
pub mod store;
pub mod trie;

#[cfg(test)]
mod proptests;

pub use command::Command;
pub use config::Config;
pub use directory::{Contact, PhoneTrie};
pub use error::{DirectoryError, DirectoryResult};
pub use handler::{serve, CommandHandler};
pub use key::PhoneNumber;
pub use response::{Response, Status};
pub use store::ContactStore;
pub use trie::DigitTrie;
