use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn log_format(cfg: &AppConfig) -> LogFormat {
    match cfg.logging.format.as_str() {
        "json" => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, CONFIG_PATH and SERVER_* take effect
    dotenv().ok();

    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging(LogFormat::Compact);
            error!(
                service = "menu_api",
                event = "config_invalid",
                error = %e,
                "invalid configuration"
            );
            return std::process::ExitCode::FAILURE;
        }
    };
    init_logging(log_format(&cfg));
    info!(
        service = "menu_api",
        event = "logger_init",
        format = %cfg.logging.format,
        "tracing subscriber initialized"
    );

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "menu_api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "menu_api",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "menu_api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "menu api starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(
                service = "menu_api",
                event = "stop",
                %service_id,
                pid,
                "server stopped normally"
            );
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                service = "menu_api",
                event = "run_failed",
                error = %e,
                "server::run returned error"
            );
            std::process::ExitCode::FAILURE
        }
    }
}
