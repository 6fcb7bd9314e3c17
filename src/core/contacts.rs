use crate::core::{AddressBook, Storage};
use crate::domain::address::Address;
use crate::domain::model::{Name, Person};
use crate::utils::error::{AddressBookError, Result};
use serde::Deserialize;

/// One row of the contacts CSV: `name,phone,email,address,address_private`.
#[derive(Debug, Deserialize)]
struct ContactRecord {
    name: String,
    phone: String,
    email: String,
    address: String,
    #[serde(default)]
    address_private: Option<bool>,
}

impl ContactRecord {
    fn into_person(self) -> Result<Person> {
        let name = Name::new(&self.name)?;
        let address = Address::parse(&self.address, self.address_private.unwrap_or(false))?;
        Ok(Person::new(name, self.phone, self.email, address))
    }
}

/// Reads a contacts CSV through a [`Storage`] backend. The file is never written.
pub struct ContactsLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> ContactsLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn load(&self, path: &str) -> Result<AddressBook> {
        tracing::debug!("Reading contacts from: {}", path);
        let data = self.storage.read_file(path).await?;
        let book = parse_contacts(&data)?;
        tracing::debug!("Loaded {} persons", book.len());
        Ok(book)
    }
}

/// Parses CSV bytes into an [`AddressBook`]; the first invalid row aborts the load.
pub fn parse_contacts(data: &[u8]) -> Result<AddressBook> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(data);
    let headers = reader.headers()?.clone();

    let mut persons = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| AddressBookError::InvalidRecord {
            line: e.position().map(|p| p.line()).unwrap_or_default(),
            reason: e.to_string(),
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let record: ContactRecord =
            row.deserialize(Some(&headers))
                .map_err(|e| AddressBookError::InvalidRecord {
                    line,
                    reason: e.to_string(),
                })?;

        let person = record
            .into_person()
            .map_err(|e| AddressBookError::InvalidRecord {
                line,
                reason: e.to_string(),
            })?;
        persons.push(person);
    }

    Ok(AddressBook::new(persons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::MESSAGE_ADDRESS_CONSTRAINTS;

    const CONTACTS: &str = "\
name,phone,email,address,address_private
Alice Pauline,85355255,alice@example.com,\"123, Jurong West Ave 6, #08-111, 600123\",false
Bob Choo,87487765,bob@example.com,\"2, Side Rd, #01-01, 100200\",true
Carl Tan,95352563,carl@example.com,\"3, Main St, 12, 231,534\",
";

    #[test]
    fn test_parse_contacts() {
        let book = parse_contacts(CONTACTS.as_bytes()).unwrap();
        let persons = book.all_persons();

        assert_eq!(persons.len(), 3);
        assert_eq!(persons[0].name().full_name(), "Alice Pauline");
        assert_eq!(persons[0].address().street_name().value(), " Jurong West Ave 6");
        assert!(!persons[0].address().is_private());
        assert!(persons[1].address().is_private());
        assert!(!persons[2].address().is_private());
        assert_eq!(persons[2].address().postal_code().value(), " 231,534");
    }

    #[test]
    fn test_missing_privacy_column_defaults_to_public() {
        let data = "name,phone,email,address\nAlice Pauline,1,a@b.c,\"1,2,3,4\"\n";
        let book = parse_contacts(data.as_bytes()).unwrap();

        assert!(!book.all_persons()[0].address().is_private());
    }

    #[test]
    fn test_short_row_omits_trailing_privacy_value() {
        let data = "name,phone,email,address,address_private\nAlice Pauline,1,a@b.c,\"1,2,3,4\"\nBob Choo,2,b@c.d,\"5,6,7,8\",true\n";
        let book = parse_contacts(data.as_bytes()).unwrap();
        let persons = book.all_persons();

        assert_eq!(persons.len(), 2);
        assert!(!persons[0].address().is_private());
        assert!(persons[1].address().is_private());
    }

    #[test]
    fn test_row_missing_required_column_reports_line() {
        let data = "name,phone,email,address\nAlice Pauline,1,a@b.c\n";
        assert!(matches!(
            parse_contacts(data.as_bytes()),
            Err(AddressBookError::InvalidRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_address_reports_line() {
        let data = "name,phone,email,address\nAlice Pauline,1,a@b.c,\"1,2,3,4\"\nBob Choo,2,b@c.d,nowhere\n";
        let err = parse_contacts(data.as_bytes()).unwrap_err();

        match err {
            AddressBookError::InvalidRecord { line, reason } => {
                assert_eq!(line, 3);
                assert_eq!(reason, MESSAGE_ADDRESS_CONSTRAINTS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let data = "name,phone,email,address\nAl!ce,1,a@b.c,\"1,2,3,4\"\n";
        assert!(matches!(
            parse_contacts(data.as_bytes()),
            Err(AddressBookError::InvalidRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_empty_file_with_header_is_empty_book() {
        let book = parse_contacts(b"name,phone,email,address\n").unwrap();
        assert!(book.is_empty());
    }
}
