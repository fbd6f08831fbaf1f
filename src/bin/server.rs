use std::{fs::OpenOptions, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{
    EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt,
};

use budget_buddy::{
    AppState, DEFAULT_MOCK_LATENCY, MockApi, RestApi, TransactionApi, build_router,
    graceful_shutdown, logging_middleware, seed_transactions,
};

/// The web server for BudgetBuddy.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The URL of the transaction service's collection, e.g. http://localhost:5000/api/transactions.
    #[arg(long, required_unless_present = "mock")]
    api_url: Option<String>,

    /// Keep transactions in memory instead of using a transaction service.
    #[arg(long)]
    mock: bool,

    /// How long the mock takes to list transactions, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_MOCK_LATENCY.as_millis() as u64)]
    mock_latency_ms: u64,

    /// Give up on requests to the transaction service after this many seconds.
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// The port to serve the app from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let api: Arc<dyn TransactionApi> = match (&args.api_url, args.mock) {
        (Some(api_url), false) => {
            let timeout = args.request_timeout_secs.map(Duration::from_secs);
            tracing::info!("Using the transaction service at {api_url}");
            let api = RestApi::new(api_url, timeout).unwrap_or_else(|error| {
                tracing::error!("Could not create the transaction service client: {error}");
                std::process::exit(1);
            });
            Arc::new(api)
        }
        _ => {
            tracing::info!("Using mock transactions");
            Arc::new(MockApi::new(
                seed_transactions(),
                Duration::from_millis(args.mock_latency_ms),
            ))
        }
    };

    // The transactions are fetched each time the dashboard page is served.
    let app_state = AppState::new(api, args.mock);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(app_state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on http://{}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("Server stopped unexpectedly.");
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let stdout_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(stdout_filter))
        .with(debug_log.with_filter(filter::LevelFilter::DEBUG))
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
