#[tokio::main]
async fn main() {
    if let Err(e) = checkin_server::run_with_config().await {
        tracing::error!(error = %e, "checkin server stopped");
        std::process::exit(1);
    }
}
