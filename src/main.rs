use clap::Parser;
use dial::config::{self, Config, ConfigColor};
use dial::gui::app::{AppInit, AppModel};
use dial::gui::dial::State;
use dial::gui::theme::DialColors;
use dial::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dial", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the one in the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Disc color while the dial is on (color name or #rrggbb)
    #[arg(long)]
    on_color: Option<ConfigColor>,

    /// Disc color while the dial is off (color name or #rrggbb)
    #[arg(long)]
    off_color: Option<ConfigColor>,

    /// Write a commented default config file, print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if cli.init_config {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let overrides = Config {
        on_color: cli.on_color,
        off_color: cli.off_color,
    };
    let config = config::load_or_default(&config_path).merge(overrides);
    let state = State::new(DialColors::from(&config));
    log::info!("Starting dial with config {}", config_path.display());

    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx, config_path.clone());

    // clap owns the command line; keep GTK from parsing it again
    let app = RelmApp::new("org.dialview.dial").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        state,
        config_path,
        overrides,
        events: rx,
    });
    Ok(())
}
