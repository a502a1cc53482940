use anyhow::{Context, Result};
use folio::{Command, Config, Site, SiteContent};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let args = config.site_args();
    let content = SiteContent::load(&args.site).context("Failed to load site content")?;
    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let documents = args.document_source(&http);
    let site = Site::new(content, documents, http);

    match &config.command {
        Command::Build(build) => {
            let summary = folio::build_site(&site, &build.site.content, &build.output)
                .await
                .context("Failed to build site")?;

            let index = build.output.join("index.html");
            info!(
                pages = summary.pages,
                files_copied = summary.files_copied,
                index = %index.display(),
                "build_complete"
            );

            if !build.no_open
                && let Err(e) = open::that(&index)
            {
                warn!(error = %e, "open_browser_failed");
            }
        }
        Command::Serve(serve) => {
            folio::serve(Arc::new(site), serve.site.content.clone(), serve.port)
                .await
                .context("Preview server failed")?;
        }
    }

    Ok(())
}
