use conceptlab_backend::startup;

#[tokio::main]
async fn main() {
    // Subscriber goes up before anything fallible so fatal startup errors
    // are always visible.
    tracing_subscriber::fmt::init();

    if let Err(err) = startup::run().await {
        tracing::error!("❌ {}", err);
        std::process::exit(1);
    }
}
