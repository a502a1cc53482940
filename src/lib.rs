//! Static site generator and preview server for a personal academic site.

mod assets;
pub mod blog;
pub mod components;
mod config;
pub mod content;
mod error;
mod generators;
pub mod geo;
pub mod markdown;
pub mod pages;
pub mod routes;
mod server;
mod site;

pub use assets::{STYLESHEET, bundled_css, write_css_assets};
pub use blog::{
    DirectorySource, DocumentSource, HttpSource, LOAD_ERROR_TEXT, PostPhase, PostSnapshot,
    PostView, load_document, open_post,
};
pub use config::{BuildArgs, Command, Config, ServeArgs, SiteArgs};
pub use content::SiteContent;
pub use error::SiteError;
pub use generators::{BuildSummary, build_site};
pub use routes::{LinkStyle, Route};
pub use server::serve;
pub use site::Site;
