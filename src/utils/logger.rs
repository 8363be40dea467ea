use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "dog_breeds=info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// stdout 留給 JSON 回應，日誌寫到 stderr
pub fn init_cli_logger(verbose: bool) {
    let fallback = if verbose {
        "dog_breeds=debug,info"
    } else {
        DEFAULT_DIRECTIVE
    };

    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    // CloudWatch 自帶時間戳
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_DIRECTIVE))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .with_current_span(false),
        )
        .init();
}
