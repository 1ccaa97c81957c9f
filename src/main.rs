use app::{AppConfig, AppState, DEFAULT_ROUTE, create_app};
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use diagnostics::LogSink;
use error::ServerError;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

mod api_docs;
mod app;
mod diagnostics;
mod error;
mod models;
mod routes;
mod weather;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "FORECAST_ADDRESS", default_value = "0.0.0.0")]
    address: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    #[arg(short, long, env = "FORECAST_ROUTE", default_value = DEFAULT_ROUTE)]
    route: String,

    /// Serve the OpenAPI description of the forecast route.
    #[arg(long, env = "API_DOCS")]
    api_docs: bool,

    /// Draw every forecast from one generator seeded with this value.
    #[arg(long, env = "FORECAST_SEED")]
    seed: Option<u64>,

    #[arg(short, long, env = "KEY_FILE_PATH")]
    key_file_path: Option<String>,

    #[arg(short, long, env = "CERT_FILE_PATH")]
    cert_file_path: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(err) = serve(args).await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn serve(args: Args) -> Result<(), ServerError> {
    let config = AppConfig {
        route: args.route,
        api_docs: args.api_docs,
        seed: args.seed,
    };
    let state = AppState::new(&config, Arc::new(LogSink));
    let app = create_app(&config, state)?;

    let addr = SocketAddr::new(args.address, args.port);
    log::info!("serving forecasts at {}", config.route);
    if let Some(seed) = config.seed {
        log::info!("using seeded random source ({})", seed);
    }

    log::info!("listening on {}", addr);
    match (args.key_file_path, args.cert_file_path) {
        (Some(key_file_path), Some(cert_file_path)) => {
            log::info!(
                "using tls with key file {} and cert file {}",
                key_file_path,
                cert_file_path
            );
            let tls = RustlsConfig::from_pem_file(cert_file_path, key_file_path)
                .await
                .map_err(ServerError::Tls)?;
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await
                .map_err(ServerError::Serve)
        }
        (None, None) => axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
            .map_err(ServerError::Serve),
        _ => Err(ServerError::IncompleteTls),
    }
}
