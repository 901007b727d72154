//! Subcommands and their arguments.

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Hear the menu, speak (type) your order and place it
    Order(OrderArgs),

    /// Fetch and print today's menu
    Menu(ServerArgs),
}

/// Where the order server lives.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Server root URL exposing /api/menu and /api/order
    #[arg(long = "server", env = "BISTRO_SERVER_URL")]
    pub server_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", env = "BISTRO_SUBMIT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Arguments of `bistro order`.
#[derive(Args, Debug, Clone, Default)]
pub struct OrderArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    /// Email for the order confirmation (can also be set in the session)
    #[arg(long, env = "BISTRO_EMAIL")]
    pub email: Option<String>,

    /// Recognition and speech locale (BCP-47)
    #[arg(long, env = "BISTRO_LOCALE")]
    pub locale: Option<String>,

    /// Restaurant name used in the welcome prompt
    #[arg(long = "restaurant", env = "BISTRO_RESTAURANT_NAME")]
    pub restaurant_name: Option<String>,

    /// Pace spoken prompts at this many words per minute
    #[arg(long = "speak-wpm", env = "BISTRO_SPEAK_WPM")]
    pub speak_wpm: Option<u32>,
}
