use addressbook::{find_matches, Address, AddressBook, Command, FindCommand, Name, Person};
use std::collections::HashSet;

fn p(name: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        "94351253".to_string(),
        format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        Address::parse(Address::EXAMPLE, false).unwrap(),
    )
}

fn keywords(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_find_alice_and_bob() {
    let persons = vec![p("Alice Pauline"), p("Bob Choo"), p("Carl Tan")];
    let found = find_matches(&keywords(&["ALICE", "BOB"]), &persons);

    assert_eq!(found, vec![&persons[0], &persons[1]]);
}

#[test]
fn test_partial_word_does_not_match() {
    let persons = vec![p("Alicen Tan"), p("Alice Tan")];
    let found = find_matches(&keywords(&["alice"]), &persons);

    assert_eq!(found, vec![&persons[1]]);
}

#[test]
fn test_no_keywords_no_matches() {
    let persons = vec![p("Alice Pauline"), p("Bob Choo")];
    assert!(find_matches(&HashSet::new(), &persons).is_empty());
}

#[test]
fn test_find_command_over_address_book() {
    let book = AddressBook::new(vec![
        p("Daniel Meier"),
        p("Elle Meyer"),
        p("Fiona Kunz"),
        p("George Best"),
    ]);

    let result = FindCommand::new(keywords(&["meier", "KUNZ"])).execute(&book);

    assert_eq!(result.feedback_to_user, "2 persons listed!");
    let names: Vec<String> = result
        .relevant_persons
        .unwrap()
        .iter()
        .map(|p| p.name().full_name().to_string())
        .collect();
    assert_eq!(names, vec!["Daniel Meier", "Fiona Kunz"]);
    assert_eq!(book.len(), 4);
}

#[test]
fn test_search_runs_concurrently_over_shared_book() {
    let book = std::sync::Arc::new(AddressBook::new(vec![p("Alice Pauline"), p("Bob Choo")]));

    let handles: Vec<_> = ["alice", "bob", "zed"]
        .into_iter()
        .map(|kw| {
            let book = book.clone();
            std::thread::spawn(move || find_matches(&keywords(&[kw]), book.all_persons()).len())
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![1, 1, 0]);
}
