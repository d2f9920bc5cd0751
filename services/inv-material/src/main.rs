//! inv-material Service - Material Inventory

use std::net::SocketAddr;
use std::sync::Arc;

use mill_config::AppConfig;
use mill_telemetry::{init_tracing, init_tracing_json};
use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use inv_material::api;
use inv_material::application::ServiceHandler;
use inv_material::infrastructure::persistence::{
    connect, PostgresMaterialRepository, PostgresSupplierRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!("Initializing inv-material Service...");

    // 连接数据库并执行迁移
    let pool = connect(
        config.database.url.expose_secret(),
        config.database.max_connections,
    )
    .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let material_repo = Arc::new(PostgresMaterialRepository::new(pool.clone()));
    let supplier_repo = Arc::new(PostgresSupplierRepository::new(pool));
    info!("Repositories initialized");

    let handler = Arc::new(ServiceHandler::new(material_repo, supplier_repo));

    // 构建路由
    let app = api::routes(handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting inv-material service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
