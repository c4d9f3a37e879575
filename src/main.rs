mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    observability::{self, ApmClient},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    observability::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let api_doc = startup::load_api_doc(&config.swagger_path);
    let apm = ApmClient::new(&config.apm);

    tracing::info!(app = apm.app_name(), "Starting server");

    let app = router::router(api_doc).with_state(AppState::new(db, apm));

    let listener = TcpListener::bind(config.bind_address.as_str()).await?;
    tracing::info!(
        "Server is running on http://{}/swagger/",
        config.bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
