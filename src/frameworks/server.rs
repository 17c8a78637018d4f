use crate::frameworks::config;
use crate::interface_adapters::json_store::JsonFileGuestStore;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use tokio::net::TcpListener;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let store = JsonFileGuestStore::new(config::data_path());
    tracing::info!(path = %store.path().display(), "guests file configured");
    let state = AppState { store };

    let addr = config::bind_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            return; // Abort startup on bind failure.
        }
    };
    tracing::info!(%addr, "listening");

    // Serve app and report errors rather than panicking.
    if let Err(e) = serve(listener, state).await {
        tracing::error!(error = %e, "server error");
    }
}

// Serve the guest routes on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}
