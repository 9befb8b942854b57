use clap::Parser;
use jsonorbit::cli::{self, Args};
use jsonorbit_api::RestApi;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout may carry the payload, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(args.env_filter())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.layout_config();
    config.validate()?;

    if let Some(input) = &args.input {
        return cli::render(input, args.output.as_deref(), &config, args.pretty);
    }

    info!("Starting jsonorbit v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API port: {}", args.http_port);

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(config, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("jsonorbit started successfully");
    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
