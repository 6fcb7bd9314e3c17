use crate::core::command::{persons_listed_summary, Command, CommandResult};
use crate::core::{AddressBook, NameWords};
use std::collections::HashSet;

/// Returns the persons whose name contains any of `keywords` as a whole word,
/// ignoring case, in the order they appear in `persons`.
pub fn find_matches<'a, P: NameWords>(keywords: &HashSet<String>, persons: &'a [P]) -> Vec<&'a P> {
    let keywords = uppercase_all(keywords);
    if keywords.is_empty() {
        return Vec::new();
    }

    persons
        .iter()
        .filter(|person| {
            !person
                .words_in_name_case_insensitive()
                .is_disjoint(&keywords)
        })
        .collect()
}

fn uppercase_all(keywords: &HashSet<String>) -> HashSet<String> {
    keywords.iter().map(|k| k.to_uppercase()).collect()
}

/// Finds and lists all persons whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: HashSet<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";

    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

    pub fn new(keywords: HashSet<String>) -> Self {
        Self { keywords }
    }

    /// Builds the command from raw arguments, each of which may hold several
    /// whitespace-separated keywords.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = args
            .into_iter()
            .flat_map(|arg| {
                arg.as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self::new(keywords)
    }

    pub fn keywords(&self) -> HashSet<String> {
        self.keywords.clone()
    }

    /// Uppercased copy of the keywords, rebuilt on every call.
    pub fn case_insensitive_keywords(&self) -> HashSet<String> {
        uppercase_all(&self.keywords)
    }
}

impl Command for FindCommand {
    fn execute(&self, book: &AddressBook) -> CommandResult {
        let found: Vec<_> = find_matches(&self.keywords, book.all_persons())
            .into_iter()
            .cloned()
            .collect();
        CommandResult::with_persons(persons_listed_summary(found.len()), found)
    }
}
