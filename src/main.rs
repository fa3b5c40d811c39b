use clap::{Parser, Subcommand};

use angie_bot::domain::entities::{Channel, Message};
use angie_bot::domain::traits::Bot;
use angie_bot::infrastructure::adapters::ConsoleAdapter;
use angie_bot::infrastructure::bootstrap::build_angie;
use angie_bot::infrastructure::config::Config;
use angie_bot::infrastructure::sources;
use angie_bot::{AddressMode, Angie, BotError};

#[derive(Parser)]
#[command(name = "angie-bot")]
#[command(about = "A chat bot that routes messages to commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot on the console
    Run,
    /// Answer a single message and exit
    Ask {
        /// Message text, e.g. "angie version"
        text: Vec<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config),
        Commands::Ask { text } => ask(&cli.config, &text.join(" ")),
        Commands::Version => {
            println!("angie-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.apply_env();
    config
}

/// Source data is loaded (and fetched) before any tokio runtime exists
fn setup(config_path: &str) -> Result<(Config, Angie), BotError> {
    let config = load_config(config_path);
    let data = sources::load_with_remote(&config.sources)?;
    let angie = build_angie(&config, data)?;
    Ok((config, angie))
}

fn ask(config_path: &str, text: &str) -> Result<(), BotError> {
    let (config, angie) = setup(config_path)?;

    let channel = match config.bot.mode {
        AddressMode::Direct => Channel::Direct,
        AddressMode::Mention => Channel::Room,
    };
    let message = Message::new("cli", text).with_channel(channel).with_platform("cli");

    match angie.get_reply(&message) {
        Some(reply) => println!("{}", reply),
        None => tracing::info!("No reply"),
    }
    Ok(())
}

fn run_bot(config_path: &str) -> Result<(), BotError> {
    let (config, angie) = setup(config_path)?;
    tracing::info!("Starting {} in {:?} mode", angie.name(), config.bot.mode);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    rt.block_on(async {
        let bot = ConsoleAdapter::new(angie.name());
        let bot = match config.bot.mode {
            AddressMode::Direct => bot.direct(),
            AddressMode::Mention => bot,
        };
        run_console_bot(bot, &angie).await
    })
}

async fn run_console_bot<B: Bot>(bot: B, angie: &Angie) -> Result<(), BotError> {
    bot.start().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: {} ({})", info.name, info.platform);

    while let Some(message) = bot.next_message().await {
        if let Some(reply) = angie.get_reply(&message) {
            if let Err(e) = bot.send_message(&message.chat_id, &reply).await {
                tracing::warn!("Failed to send reply: {}", e);
            }
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn init_config(config_path: &str) -> Result<(), BotError> {
    if std::path::Path::new(config_path).exists() {
        return Err(BotError::Internal(format!("{} already exists", config_path)));
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(config_path, yaml)
        .map_err(|e| BotError::Internal(format!("Failed to write {}: {}", config_path, e)))?;
    println!("Wrote default config to {}", config_path);
    Ok(())
}
