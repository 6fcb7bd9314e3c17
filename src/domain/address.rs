//! Structured person address.
//!
//! An [`Address`] is built from a raw string such as `123, Clementi Ave 3, #12-34, 231534`.
//! The first three commas delimit block, street and unit; everything after the third comma
//! is the postal code, commas included. Sub-fields are kept verbatim, so the space that
//! usually follows a comma stays part of the next field.

use crate::utils::error::{AddressBookError, Result};
use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

pub const MESSAGE_ADDRESS_CONSTRAINTS: &str =
    "Person addresses must contain the following fields: BLOCK, STREET, UNIT, POSTAL_CODE\n";

static ADDRESS_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^,\r\n]+),([^,\r\n]+),([^,\r\n]+),([^\r\n]+)$")
        .expect("address grammar is a valid regex")
});

macro_rules! address_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            fn new(value: &str) -> Self {
                Self(value.to_string())
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

address_field!(
    /// Block number, e.g. `123`.
    Block
);
address_field!(Street);
address_field!(Unit);
address_field!(
    /// Everything after the third comma.
    PostalCode
);

#[derive(Debug, Clone)]
pub struct Address {
    block_number: Block,
    street_name: Street,
    unit_number: Unit,
    postal_code: PostalCode,
    is_private: bool,
}

impl Address {
    pub const EXAMPLE: &'static str = "123, Clementi Ave 3, #12-34, 231534";

    /// Returns true if `raw`, once trimmed, has four non-empty comma-separated segments.
    pub fn is_valid_address(raw: &str) -> bool {
        ADDRESS_GRAMMAR.is_match(raw.trim())
    }

    pub fn parse(raw: &str, is_private: bool) -> Result<Self> {
        let trimmed = raw.trim();
        let caps = ADDRESS_GRAMMAR
            .captures(trimmed)
            .ok_or_else(|| AddressBookError::validation(MESSAGE_ADDRESS_CONSTRAINTS))?;

        Ok(Self {
            block_number: Block::new(&caps[1]),
            street_name: Street::new(&caps[2]),
            unit_number: Unit::new(&caps[3]),
            postal_code: PostalCode::new(&caps[4]),
            is_private,
        })
    }

    pub fn block_number(&self) -> &Block {
        &self.block_number
    }

    pub fn street_name(&self) -> &Street {
        &self.street_name
    }

    pub fn unit_number(&self) -> &Unit {
        &self.unit_number
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.block_number, self.street_name, self.unit_number, self.postal_code
        )
    }
}

// Equality and hashing go through the canonical string; the privacy flag is not compared.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for Address {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, false)
    }
}
