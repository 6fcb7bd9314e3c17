use crate::core::{AddressBook, Person};
use crate::utils::error::Result;
use serde::Serialize;

pub const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "persons listed!";

pub fn persons_listed_summary(count: usize) -> String {
    format!("{} {}", count, MESSAGE_PERSONS_LISTED_OVERVIEW)
}

pub trait Command {
    fn execute(&self, book: &AddressBook) -> CommandResult;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    pub relevant_persons: Option<Vec<Person>>,
}

#[derive(Serialize)]
struct CommandResultView<'a> {
    message: &'a str,
    persons: Vec<crate::domain::model::PersonView<'a>>,
}

impl CommandResult {
    pub fn new(feedback_to_user: String) -> Self {
        Self {
            feedback_to_user,
            relevant_persons: None,
        }
    }

    pub fn with_persons(feedback_to_user: String, persons: Vec<Person>) -> Self {
        Self {
            feedback_to_user,
            relevant_persons: Some(persons),
        }
    }

    /// 編號列表（從 1 開始）加上摘要行
    pub fn render_text(&self, hide_private: bool) -> String {
        let mut out = String::new();
        if let Some(persons) = &self.relevant_persons {
            for (i, person) in persons.iter().enumerate() {
                let line = if hide_private {
                    person.as_text_hide_private()
                } else {
                    person.as_text_show_all()
                };
                out.push_str(&format!("{}. {}\n", i + 1, line));
            }
        }
        out.push_str(&self.feedback_to_user);
        out
    }

    pub fn render_json(&self, hide_private: bool) -> Result<String> {
        let view = CommandResultView {
            message: &self.feedback_to_user,
            persons: self
                .relevant_persons
                .iter()
                .flatten()
                .map(|p| p.to_view(hide_private))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }
}

/// Lists every person in the address book.
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
}

impl Command for ListCommand {
    fn execute(&self, book: &AddressBook) -> CommandResult {
        let persons = book.all_persons().to_vec();
        CommandResult::with_persons(persons_listed_summary(persons.len()), persons)
    }
}
