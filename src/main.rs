use addressbook::core::ConfigProvider;
use addressbook::utils::error::ErrorSeverity;
use addressbook::utils::{logger, validation::Validate};
use addressbook::{
    Address, AddressBookError, CliCommand, CliConfig, Command, CommandResult, ContactsLoader,
    FindCommand, ListCommand, LocalStorage, OutputFormat, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 先載入 TOML 配置，日誌等級可能來自其中
    let toml = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(toml) => toml,
        Err(e) => exit_with(&e),
    };
    if let Some(toml) = &toml {
        config.merge_toml(toml);
    }

    let level = toml.as_ref().and_then(|t| t.log_level());
    if config.log_json {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    tracing::info!("Starting addressbook CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let validated = match &toml {
        Some(toml) => toml.validate().and_then(|_| config.validate()),
        None => config.validate(),
    };
    if let Err(e) = validated {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    match run(&config).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e)
        }
    }
}

async fn run(config: &CliConfig) -> addressbook::Result<String> {
    let command: Box<dyn Command> = match &config.command {
        CliCommand::CheckAddress { address, private } => {
            return check_address(address, *private, config.format);
        }
        CliCommand::Find { keywords } => {
            let command = FindCommand::from_args(keywords);
            tracing::debug!("Searching for {} keyword(s)", command.keywords().len());
            Box::new(command)
        }
        CliCommand::List => Box::new(ListCommand),
    };

    let loader = ContactsLoader::new(LocalStorage::new(".".to_string()));
    let book = loader.load(config.contacts_path()).await?;
    tracing::info!("📁 Loaded {} persons from {}", book.len(), config.contacts_path());

    let result = command.execute(&book);
    render(&result, config)
}

fn check_address(raw: &str, private: bool, format: OutputFormat) -> addressbook::Result<String> {
    let address = Address::parse(raw, private)?;
    let output = match format {
        OutputFormat::Text => format!(
            "Block: {}\nStreet: {}\nUnit: {}\nPostal code: {}\nPrivate: {}",
            address.block_number(),
            address.street_name(),
            address.unit_number(),
            address.postal_code(),
            address.is_private()
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "block": address.block_number().value(),
            "street": address.street_name().value(),
            "unit": address.unit_number().value(),
            "postal_code": address.postal_code().value(),
            "is_private": address.is_private(),
        }))?,
    };
    Ok(output)
}

fn render(result: &CommandResult, config: &CliConfig) -> addressbook::Result<String> {
    let hide_private = !config.show_private();
    match config.format {
        OutputFormat::Text => Ok(result.render_text(hide_private)),
        OutputFormat::Json => result.render_json(hide_private),
    }
}

fn exit_with(e: &AddressBookError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
