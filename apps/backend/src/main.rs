use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::RuntimeEnv;
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::security_headers::SecurityHeaders;
use backend::middleware::structured_logger::StructuredLogger;
use backend::routes;
use backend::state::security_config::SecurityConfig;
use backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let runtime = match RuntimeEnv::from_env() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "invalid APP_ENV");
            std::process::exit(1);
        }
    };
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let security_config = match SecurityConfig::from_env(runtime) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid security configuration");
            std::process::exit(1);
        }
    };

    let profile = if runtime == RuntimeEnv::Test {
        DbProfile::Test
    } else {
        DbProfile::Prod
    };

    let app_state = match build_state()
        .with_db(profile)
        .with_security(security_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(?runtime, %host, port, "starting portfolio backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
