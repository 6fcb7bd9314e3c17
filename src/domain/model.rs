use crate::domain::address::Address;
use crate::utils::error::{AddressBookError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

pub const MESSAGE_NAME_CONSTRAINTS: &str =
    "Person names should be spaces or alphanumeric characters";

static NAME_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{N} ]+$").expect("name grammar is a valid regex"));

/// Anything searchable by the words of its name.
pub trait NameWords {
    /// Whitespace-separated name tokens, uppercased.
    fn words_in_name_case_insensitive(&self) -> HashSet<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !NAME_GRAMMAR.is_match(trimmed) {
            return Err(AddressBookError::validation(MESSAGE_NAME_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn full_name(&self) -> &str {
        &self.0
    }
}

impl NameWords for Name {
    fn words_in_name_case_insensitive(&self) -> HashSet<String> {
        self.0.split_whitespace().map(str::to_uppercase).collect()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: String,
    email: String,
    address: Address,
}

impl Person {
    pub fn new(name: Name, phone: String, email: String, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn as_text_show_all(&self) -> String {
        format!(
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )
    }

    pub fn as_text_hide_private(&self) -> String {
        let mut text = format!("{} Phone: {} Email: {}", self.name, self.phone, self.email);
        if !self.address.is_private() {
            text.push_str(&format!(" Address: {}", self.address));
        }
        text
    }

    pub fn to_view(&self, hide_private: bool) -> PersonView<'_> {
        let address = if hide_private && self.address.is_private() {
            None
        } else {
            Some(AddressView {
                block: self.address.block_number().value(),
                street: self.address.street_name().value(),
                unit: self.address.unit_number().value(),
                postal_code: self.address.postal_code().value(),
                is_private: self.address.is_private(),
            })
        };

        PersonView {
            name: self.name.full_name(),
            phone: &self.phone,
            email: &self.email,
            address,
        }
    }
}

impl NameWords for Person {
    fn words_in_name_case_insensitive(&self) -> HashSet<String> {
        self.name.words_in_name_case_insensitive()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}

/// Serializable projection of a [`Person`] for JSON output.
#[derive(Debug, Serialize)]
pub struct PersonView<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AddressView<'a> {
    pub block: &'a str,
    pub street: &'a str,
    pub unit: &'a str,
    pub postal_code: &'a str,
    pub is_private: bool,
}

/// Read-only, ordered collection of persons.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    pub fn all_persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, address: &str, private: bool) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            "98765432".to_string(),
            "someone@example.com".to_string(),
            Address::parse(address, private).unwrap(),
        )
    }

    #[test]
    fn test_name_words_are_uppercased_tokens() {
        let name = Name::new("Alice  Pauline tan").unwrap();
        let words = name.words_in_name_case_insensitive();

        assert_eq!(words.len(), 3);
        assert!(words.contains("ALICE"));
        assert!(words.contains("PAULINE"));
        assert!(words.contains("TAN"));
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::new("Bob Choo").is_ok());
        assert!(Name::new("R2 D2").is_ok());
        assert_eq!(Name::new("  Carl  ").unwrap().full_name(), "Carl");

        for bad in ["", "   ", "Bob@Choo", "Alice, Pauline"] {
            let err = Name::new(bad).unwrap_err();
            assert_eq!(err.to_string(), MESSAGE_NAME_CONSTRAINTS);
        }
    }

    #[test]
    fn test_hide_private_omits_private_address() {
        let public = person("Alice Pauline", "1,Main St,12,231534", false);
        let private = person("Bob Choo", "2,Side Rd,3,100200", true);

        assert!(public.as_text_hide_private().contains("Address: 1, Main St, 12, 231534"));
        assert!(!private.as_text_hide_private().contains("Address"));
        assert!(private.as_text_show_all().contains("Address: 2, Side Rd, 3, 100200"));
    }

    #[test]
    fn test_view_serializes_fields() {
        let private = person("Bob Choo", "2,Side Rd,3,100200", true);

        let hidden = serde_json::to_value(private.to_view(true)).unwrap();
        assert_eq!(hidden["name"], "Bob Choo");
        assert!(hidden.get("address").is_none());

        let shown = serde_json::to_value(private.to_view(false)).unwrap();
        assert_eq!(shown["address"]["postal_code"], "100200");
        assert_eq!(shown["address"]["is_private"], true);
    }

    #[test]
    fn test_address_book_preserves_order() {
        let book = AddressBook::new(vec![
            person("Carl Tan", "1,a,b,c", false),
            person("Alice Pauline", "2,a,b,c", false),
        ]);

        assert_eq!(book.len(), 2);
        assert!(!book.is_empty());
        assert_eq!(book.all_persons()[0].name().full_name(), "Carl Tan");
        assert!(AddressBook::default().is_empty());
    }
}
