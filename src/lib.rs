pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig, OutputFormat};

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use self::core::{
    command::{Command, CommandResult, ListCommand},
    contacts::ContactsLoader,
    find::{find_matches, FindCommand},
};
pub use domain::address::Address;
pub use domain::model::{AddressBook, Name, NameWords, Person};
pub use utils::error::{AddressBookError, Result};
