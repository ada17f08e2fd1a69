//! syncgate - Sheet Sync Gateway
//!
//! Entry point. Loads YAML config for the selected environment, wires up
//! logging, then runs the Axum gateway until SIGINT/SIGTERM.

use syncgate::config::AppConfig;

// ============================================================
// CLI ARGUMENTS
// ============================================================

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

// ============================================================
// MAIN
// ============================================================

#[tokio::main]
async fn main() {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = syncgate::logging::init_logging(&app_config);

    tracing::info!("Starting syncgate in {} mode", env);

    // Get Gateway config from YAML, allow --port override
    let port = if let Some(override_port) = get_port_override() {
        override_port
    } else {
        app_config.gateway.port
    };

    println!("=== syncgate: Sheet Sync Gateway ===");
    println!(
        "Gateway will listen on {}:{}",
        app_config.gateway.host, port
    );
    println!("Backend base URL: {}", app_config.backend.base_url);

    syncgate::gateway::run_server(&app_config, port).await;
}
