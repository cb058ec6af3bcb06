use lambda_runtime::{service_fn, Error};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    print_env_vars();

    if let Err(e) = lambda_runtime::run(service_fn(handler::my_handler)).await {
        debug!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this function
/// - ERROR for everything else
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error,bootstrap=info")))
        // CloudWatch adds its own timestamps and does not render colors
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

/// Logs all environment variables in the form of `export KEY=VALUE key2=value2`
fn print_env_vars() {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    let mut env_vars = Vec::<String>::with_capacity(30);
    env_vars.push(" export".to_string()); // the leading space keeps it first after sorting
    for (key, value) in std::env::vars() {
        match key.as_str() {
            "AWS_ACCESS_KEY_ID" | "AWS_SECRET_ACCESS_KEY" | "AWS_SESSION_TOKEN" => {
                // do not log sensitive vars
            }
            _ => {
                env_vars.push(format!("{}={}", key, value));
            }
        }
    }

    env_vars.sort();

    debug!("{}", env_vars.join(" "));
}
