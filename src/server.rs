//! Local preview server
//!
//! Serves every route rendered on request, so blog documents and boundary
//! data are fetched live and the `?id=` / `?place=` deep links work as they
//! do in the browser. Other paths fall through to the public content
//! directory. Uses hyper for the HTTP server.

use anyhow::{Context, Result};
use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::assets::{STYLESHEET, bundled_css};
use crate::pages;
use crate::routes::{LinkStyle, Route};
use crate::site::Site;

const HTML: &str = "text/html; charset=utf-8";

struct ServerState {
    site: Arc<Site>,
    content_dir: PathBuf,
    stylesheet: Bytes,
}

/// Start the preview server and run until ctrl-c
///
/// # Errors
///
/// Returns error if the port cannot be bound.
pub async fn serve(site: Arc<Site>, content_dir: PathBuf, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let state = Arc::new(ServerState {
        site,
        content_dir,
        stylesheet: Bytes::from(bundled_css()),
    });

    info!(url = %format!("http://{}", addr), "preview_server_started");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            result = listener.accept() => {
                match result {
                    Ok((stream, _addr)) => {
                        let io = TokioIo::new(stream);
                        let state = state.clone();

                        tokio::spawn(async move {
                            let service = service_fn(move |req| {
                                let state = state.clone();
                                async move { handle_request(req, state).await }
                            });

                            if let Err(e) = http1::Builder::new()
                                .serve_connection(io, service)
                                .await
                            {
                                error!(error = %e, "preview_http_error");
                            }
                        });
                    }
                    Err(e) => {
                        error!(error = %e, "preview_accept_error");
                    }
                }
            }
            _ = &mut shutdown => {
                info!("preview_server_shutdown");
                return Ok(());
            }
        }
    }
}

async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<ServerState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    let uri = &parts.uri;
    let response = respond(&state, &parts.method, uri.path(), uri.query()).await;
    debug!(
        method = %parts.method,
        path = %uri.path(),
        status = response.status().as_u16(),
        "preview_request"
    );
    Ok(response)
}

async fn respond(
    state: &ServerState,
    method: &Method,
    path: &str,
    query: Option<&str>,
) -> Response<Full<Bytes>> {
    if *method != Method::GET {
        return response(
            StatusCode::METHOD_NOT_ALLOWED,
            "text/plain",
            Bytes::from_static(b"Method Not Allowed"),
        );
    }

    if path.trim_start_matches('/') == STYLESHEET {
        return response(StatusCode::OK, "text/css", state.stylesheet.clone());
    }

    if let Some(route) = Route::parse(path, query) {
        let html = state.site.render(&route, LinkStyle::Query).await;
        return response(StatusCode::OK, HTML, Bytes::from(html.into_string()));
    }

    if let Some(file) = public_file(&state.content_dir, path) {
        match tokio::fs::read(&file).await {
            Ok(body) => return response(StatusCode::OK, content_type(&file), Bytes::from(body)),
            Err(e) => debug!(path = %file.display(), error = %e, "public_file_unreadable"),
        }
    }

    let html = pages::not_found::render(state.site.content(), path, LinkStyle::Query);
    response(StatusCode::NOT_FOUND, HTML, Bytes::from(html.into_string()))
}

fn response(status: StatusCode, content_type: &'static str, body: Bytes) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

/// Maps a request path into `root`, rejecting anything that could escape it.
fn public_file(root: &Path, path: &str) -> Option<PathBuf> {
    let relative = Path::new(path.trim_start_matches('/'));
    if relative.as_os_str().is_empty() {
        return None;
    }
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => HTML,
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("md") => "text/markdown; charset=utf-8",
        Some("json") | Some("geojson") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
