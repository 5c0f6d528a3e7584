use clap::Parser;
use tracing::info;

use linkdeck::cli::Cli;
use linkdeck::config::StaticConfig;
use linkdeck::interfaces::tui;
use linkdeck::system::{logging, panic_handler};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.generate_config {
        println!("{}", StaticConfig::generate_sample_config()?);
        return Ok(());
    }

    let config = StaticConfig::load(cli.config.as_deref());
    let guard = logging::init_logging(&config.logging)?;
    panic_handler::install_panic_hook();

    // 配置中的初始卡片在前，命令行参数追加在后
    let mut seeds = config.deck.initial_urls.clone();
    seeds.extend(cli.urls);
    info!("Linkdeck v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = tui::run_tui(&config, &seeds) {
        eprintln!("{}", e.format_colored());
        // 退出前刷新日志
        drop(guard);
        std::process::exit(1);
    }

    drop(guard);
    Ok(())
}
