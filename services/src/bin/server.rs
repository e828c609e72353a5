use photohunt_services::config::{self, get_config_element};
use photohunt_services::error::Result;
use photohunt_services::server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let logging_config: config::Logging = get_config_element()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&logging_config.log_spec).expect("to have a valid log spec"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    server::start_server().await
}
