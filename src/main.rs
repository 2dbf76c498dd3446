use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use racket_rental::config::environment::EnvironmentConfig;
use racket_rental::middleware::cors::cors_middleware;
use racket_rental::routes::create_app_router;
use racket_rental::state::AppState;
use racket_rental::storage::SheetStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🎾 Racket Rental - Backend de reservas");
    info!("======================================");

    let config = EnvironmentConfig::default();

    // Inicializar el workbook CSV
    let store = match SheetStore::new(&config.data_dir) {
        Ok(store) => {
            info!("📂 Workbook en '{}'", config.data_dir);
            store
        }
        Err(e) => {
            error!("❌ Error abriendo el workbook: {}", e);
            return Err(anyhow::anyhow!("Error de almacenamiento: {}", e));
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(store, config);

    let app = create_app_router()
        .layer(cors_middleware())
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📝 Endpoints - Order:");
    info!("   POST /api/order - Parsear y validar un formulario de orden");
    info!("   GET  /api/order/:id - Obtener una orden registrada");
    info!("📖 Endpoints - Booking:");
    info!("   GET  /api/booking/availability/:order_id - Disponibilidad y reservas vecinas");
    info!("   POST /api/booking - Registrar una reserva");
    info!("   GET  /api/booking/timeslots?date=YYYY-MM-DD&racket_type=... - Slots del día");
    info!("🎾 Endpoints - Racket:");
    info!("   GET  /api/racket - Listar el catálogo de raquetas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
