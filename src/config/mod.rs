pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::{TomlConfig, DEFAULT_CONTACTS_PATH};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "addressbook")]
#[command(about = "Search a personal contacts list and check addresses")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Contacts CSV file (overrides the config file)")]
    pub contacts: Option<String>,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Show private addresses")]
    pub show_private: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CliCommand {
    /// Find persons whose names contain any of the keywords (case-insensitive, whole words)
    Find {
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },
    /// List every person
    List,
    /// Validate an address such as "123, Clementi Ave 3, #12-34, 231534"
    CheckAddress {
        address: String,
        #[arg(long)]
        private: bool,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先，未指定的值才取自 TOML 配置
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        if self.contacts.is_none() {
            if let Some(storage) = &toml.storage {
                self.contacts = Some(storage.contacts_path.clone());
            }
        }
        self.show_private |= toml.show_private();
        self.log_json |= toml.json_logs();
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn contacts_path(&self) -> &str {
        self.contacts.as_deref().unwrap_or(DEFAULT_CONTACTS_PATH)
    }

    fn show_private(&self) -> bool {
        self.show_private
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        validate_path("contacts", self.contacts_path())
    }
}
