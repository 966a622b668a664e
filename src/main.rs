use std::process::ExitCode;

use money_graph_client::{commands, Config, FinanceClient, ReqwestTransport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("money_graph_client=info".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Using backend at {}", config.base_url);

    let transport = match ReqwestTransport::with_timeout(config.base_url.clone(), config.timeout) {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let client = FinanceClient::new(transport);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parts: Vec<&str> = args.iter().map(String::as_str).collect();

    match commands::handle_command(&client, &parts).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
