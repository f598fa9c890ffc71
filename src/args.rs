use std::sync::OnceLock;

use action_button::ButtonSize;
use clap::Parser;

/// Gallery of action buttons in every size
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Size of the buttons in the "custom" row; the button default when omitted
    #[arg(long, env = "ACTION_BUTTON_SIZE")]
    pub size: Option<ButtonSize>,

    /// Render every button without its icon
    #[arg(long)]
    pub no_icons: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

static ARGS: OnceLock<Args> = OnceLock::new();

pub fn get_args() -> &'static Args {
    ARGS.get_or_init(Args::parse)
}
