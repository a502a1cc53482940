//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::blog::{DirectorySource, DocumentSource, HttpSource};

/// Command line configuration for Folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render every page into a static output directory
    Build(BuildArgs),
    /// Serve pages rendered on request for local preview
    Serve(ServeArgs),
}

/// Inputs shared by every command.
#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    /// Site content file
    #[arg(long, default_value = "site.toml")]
    pub site: PathBuf,

    /// Public content directory holding blogs/ and images
    #[arg(long, default_value = "public")]
    pub content: PathBuf,

    /// Fetch blog documents from this base URL instead of the content directory
    #[arg(long)]
    pub documents_url: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Site inputs of whichever command was given.
    pub fn site_args(&self) -> &SiteArgs {
        match &self.command {
            Command::Build(args) => &args.site,
            Command::Serve(args) => &args.site,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the site file does not exist, the documents URL is
    /// not http(s), or the output directory is the content directory.
    pub fn validate(&self) -> Result<()> {
        let site = self.site_args();
        if !site.site.exists() {
            bail!("Site file does not exist: {}", site.site.display());
        }

        if let Some(url) = &site.documents_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            bail!("Documents URL must be http or https: {}", url);
        }

        if let Command::Build(args) = &self.command
            && args.output == site.content
        {
            bail!(
                "Output directory must differ from content directory: {}",
                args.output.display()
            );
        }

        Ok(())
    }
}

impl SiteArgs {
    /// Builds the blog document source these arguments select.
    pub fn document_source(&self, client: &reqwest::Client) -> Arc<dyn DocumentSource> {
        match &self.documents_url {
            Some(url) => Arc::new(HttpSource::new(client.clone(), url.clone())),
            None => Arc::new(DirectorySource::new(self.content.clone())),
        }
    }
}
