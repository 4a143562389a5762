use liveness::{LISTEN_ADDR, ServerError, server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let app = liveness::create_root_app();

    info!("server is listening on {}", LISTEN_ADDR);
    info!("good luck, stay even");

    let tcp_listener = server::bind(LISTEN_ADDR).await.inspect_err(|e| {
        error!("{}", e);
    })?;

    // runs until the process is killed
    if let Err(e) = axum::serve(tcp_listener, app.into_make_service()).await {
        error!("server error: {:?}", e);
        return Err(ServerError::Run(e));
    }

    Ok(())
}
