use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tasktrack_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(args: &Args) {
    let filter = EnvFilter::try_new(&args.log.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if args.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args);

    let addr = format!("{}:{}", args.server.host, args.server.port).parse::<SocketAddr>()?;

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    info!("listening on {}", addr);
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
