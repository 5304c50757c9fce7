use anyhow::{Context, Result};
use clap::Parser;
use sharekit::cli::{Cli, Commands};
use sharekit::config::Config;
use sharekit::share::build_share_links;
use sharekit::toast::Toast;
use sharekit::{PageContext, Platform, ShareWidget, SystemHost};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Share {
            platform,
            url,
            title,
            print,
        } => handle_share(&config, platform, PageContext::new(url, title), print),
        Commands::Links { url, title, json } => {
            handle_links(&config, PageContext::new(url, title), json)
        }
        Commands::Copy { url } => handle_copy(&config, url).await,
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.port);
            sharekit::server::run(&config, port).await
        }
    }
}

fn widget(config: &Config, page: PageContext) -> Result<ShareWidget<SystemHost>> {
    let widget = ShareWidget::new(SystemHost::new()?, page, config.share_text())
        .with_popup(config.popup())
        .with_toast(Toast::new(config.toast_duration()));
    Ok(widget)
}

fn handle_share(config: &Config, platform: Platform, page: PageContext, print: bool) -> Result<()> {
    let widget = widget(config, page)?;

    if print {
        println!("{}", widget.link_for(platform).url);
    } else {
        widget.share_to(platform);
    }

    Ok(())
}

fn handle_links(config: &Config, page: PageContext, json: bool) -> Result<()> {
    let links = build_share_links(&page, &config.share_text(), config.popup());

    if json {
        let out = serde_json::to_string_pretty(&links).context("Failed to serialize links")?;
        println!("{out}");
        return Ok(());
    }

    for link in links {
        println!("{:<9} {}", link.platform, link.url);
    }

    Ok(())
}

async fn handle_copy(config: &Config, url: String) -> Result<()> {
    let widget = widget(config, PageContext::new(url, ""))?;
    let mut toast = widget.toast().subscribe();

    widget.copy_current_link().await;

    if toast.borrow_and_update().is_visible() {
        println!("✓ Link copied!");
        toast
            .wait_for(|state| !state.is_visible())
            .await
            .context("Toast channel closed")?;
        info!("Toast dismissed");
    }

    Ok(())
}
