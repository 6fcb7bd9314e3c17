pub mod command;
pub mod contacts;
pub mod find;

pub use crate::domain::address::Address;
pub use crate::domain::model::{AddressBook, Name, NameWords, Person};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
