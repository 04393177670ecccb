mod args;
mod global;
mod handlers;
mod input;

use clap::{Parser, Subcommand};
use devtoolbox::ToolboxConfig;

use args::{
    Base64Action, ColorArgs, ConfigAction, DateArgs, EscapeAction, HashArgs, UrlAction, UuidArgs,
};
use global::GlobalArgs;
use input::InputArgs;

#[derive(Parser)]
#[command(name = "devtoolbox")]
#[command(version)]
#[command(about = "Developer text utilities: escapes, URL encoding, Base64, dates, UUIDs, colors, counts and hashes", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode, decode and detect character escapes
    #[command(subcommand)]
    Escape(EscapeAction),

    /// Percent-encode and decode URL components
    #[command(subcommand)]
    Url(UrlAction),

    /// Encode, decode and inspect Base64
    #[command(subcommand)]
    Base64(Base64Action),

    /// Convert a date between formats
    Date(DateArgs),

    /// Generate or validate UUIDs
    Uuid(UuidArgs),

    /// Convert a CSS color between formats
    Color(ColorArgs),

    /// Count characters, words and lines (a trailing newline on stdin counts as a line)
    Count(InputArgs),

    /// Hash text or a file
    Hash(HashArgs),

    /// List options and show the effective configuration
    #[command(subcommand)]
    Config(ConfigAction),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let global = cli.global;

    // RUST_LOG still overrides the -q/-v level
    let _ = env_logger::Builder::new()
        .filter_level(global.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();

    if global.no_color {
        devtoolbox::disable_color();
    }

    // Load configuration with user overrides
    let config = ToolboxConfig::load_with_overrides(global.config.as_deref())?;
    log::debug!("effective configuration: {:?}", config);

    match cli.command {
        Command::Escape(action) => handlers::escape::handle(action, &global, &config),
        Command::Url(action) => handlers::url::handle(action, &global, &config),
        Command::Base64(action) => handlers::base64::handle(action, &global, &config),
        Command::Date(args) => handlers::date::handle(args, &global, &config),
        Command::Uuid(args) => handlers::uuid::handle(args, &global, &config),
        Command::Color(args) => handlers::color::handle(args, &global, &config),
        Command::Count(input) => handlers::count::handle(input, &global, &config),
        Command::Hash(args) => handlers::hash::handle(args, &global, &config),
        Command::Config(action) => handlers::config::handle(action, &global, &config),
    }
}
