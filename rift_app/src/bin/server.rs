//! Development server: static assets plus the single page shell for every
//! path the route table knows.

#![allow(missing_docs)]

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    server::run().await
}

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use bytes::Bytes;
    use http_body_util::{BodyExt, Full};
    use hyper::{Request, Response, StatusCode, body::Incoming as IncomingBody};
    use hyper::{server::conn::http1, service::service_fn};
    use hyper_util::rt::TokioIo;
    use navi::{HistoryMode, Location, MemoryHistory, RouteTable, RouterConfig};
    use std::{
        env,
        path::{Path, PathBuf},
        sync::Arc,
    };
    use tokio::net::TcpListener;
    use tracing::{debug, error, info, warn};
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

    const INDEX_HTML: &str = include_str!("../../static/index.html");

    struct ServerConfig {
        addr: String,
        static_dir: PathBuf,
    }

    impl ServerConfig {
        fn from_env() -> Self {
            Self {
                addr: env::var("RIFT_ADDR").unwrap_or_else(|_| "0.0.0.0:9999".to_owned()),
                static_dir: env::var("RIFT_STATIC_DIR")
                    .map_or_else(|_| PathBuf::from("static"), PathBuf::from),
            }
        }
    }

    struct AppState {
        config: RouterConfig,
        routes: RouteTable<()>,
        static_dir: PathBuf,
    }

    fn full<T: Into<Bytes>>(chunk: T) -> BoxBody {
        Full::new(chunk.into())
            .map_err(|never| match never {})
            .boxed()
    }

    fn respond(status: StatusCode, content_type: &str, body: impl Into<Bytes>) -> Response<BoxBody> {
        let mut response = Response::new(full(body));
        *response.status_mut() = status;

        if let Ok(value) = content_type.parse() {
            response.headers_mut().insert(hyper::header::CONTENT_TYPE, value);
        }

        response
    }

    fn content_type(path: &Path) -> &'static str {
        match path.extension().and_then(|s| s.to_str()) {
            Some("html") => "text/html",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("wasm") => "application/wasm",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("svg") => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }

    async fn serve_static(static_dir: &Path, path: &str) -> Response<BoxBody> {
        let relative = path.trim_start_matches('/');

        if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
            return respond(StatusCode::NOT_FOUND, "text/plain", "File not found");
        }

        let file_path = static_dir.join(relative);

        match tokio::fs::read(&file_path).await {
            Ok(content) => respond(StatusCode::OK, content_type(&file_path), content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                respond(StatusCode::NOT_FOUND, "text/plain", "File not found")
            }
            Err(e) => {
                error!(path = %file_path.display(), error = %e, "failed to read static file");
                respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "text/plain",
                    "Error reading file",
                )
            }
        }
    }

    fn serve_shell(state: &AppState, path: &str) -> Response<BoxBody> {
        // the route lives in the fragment, which never reaches the server
        if state.config.mode() == HistoryMode::Hash {
            return respond(StatusCode::OK, "text/html", INDEX_HTML);
        }

        let location = Location::parse(path);
        let route_path = state.config.route_path(&location);

        match state.routes.resolve(&route_path) {
            Some(resolved) => {
                debug!(route = %resolved.route.name, path, "serving shell");
                respond(StatusCode::OK, "text/html", INDEX_HTML)
            }
            None => {
                debug!(path, "no route matched");
                respond(StatusCode::NOT_FOUND, "text/html", INDEX_HTML)
            }
        }
    }

    async fn handle_request(
        req: Request<IncomingBody>,
        state: Arc<AppState>,
    ) -> Result<Response<BoxBody>, hyper::Error> {
        let path = req.uri().path();

        if let Some(asset) = path.strip_prefix("/static/") {
            return Ok(serve_static(&state.static_dir, asset).await);
        }

        Ok(serve_shell(&state, path))
    }

    pub(crate) async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing_subscriber::registry()
            .with(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "rift_app=debug,navi=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        let server_config = ServerConfig::from_env();
        let router_config = rift_app::config::router_config()?;

        // The router itself is single-threaded; connections only share the outline
        let routes = rift_app::build_router(router_config.clone(), MemoryHistory::default())?
            .table()
            .outline();

        let state = Arc::new(AppState {
            config: router_config,
            routes,
            static_dir: server_config.static_dir,
        });

        let listener = TcpListener::bind(&server_config.addr).await?;
        info!(addr = %server_config.addr, base = state.config.base(), "server running");

        loop {
            let (stream, _) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let state = Arc::clone(&state);

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let state = Arc::clone(&state);
                    async move { handle_request(req, state).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    warn!(error = ?err, "error serving connection");
                }
            });
        }
    }
}
