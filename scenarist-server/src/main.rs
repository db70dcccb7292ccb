use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use scenarist_core::ContentStore;
use scenarist_server::{AppContext, Args, FsContentLoader, ServerConfig, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = ServerConfig::from_args(args).context("invalid configuration")?;

    println!("{}", "🎭 Scenarist".bright_cyan().bold());
    println!("{}", "============".cyan());

    let loader = FsContentLoader::new(&config.data_dir);
    let content = ContentStore::load(&loader)
        .with_context(|| format!("failed to load content from {}", config.data_dir.display()))?;
    println!(
        "{} {} scenarios, {} packs, {} categories, {} posts",
        "Content:".bold(),
        content.scenarios().len(),
        content.packs().len(),
        content.categories().len(),
        content.blog_posts().len()
    );

    let app = create_router(Arc::new(AppContext::from_config(content, &config)));
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    println!(
        "{} http://{}  (Ctrl+C to stop)",
        "Listening on".green().bold(),
        config.addr
    );
    if !config.secure_cookies {
        log::warn!("session cookies are not marked Secure; enable --secure-cookies behind HTTPS");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    println!("\n{}", "Stopped.".yellow());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
}
