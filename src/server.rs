use actix_web::{web, App, HttpServer};

use crate::config::Config;
use crate::dataset::EstadoDataset;
use crate::server_handlers::{help_handler, resumen_handler, tablero_handler};

/// Registra las rutas del tablero. Se usa tanto en `run_server` como en los tests.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(tablero_handler))
        .route("/api/resumen", web::get().to(resumen_handler))
        .route("/help", web::get().to(help_handler));
}

/// Arranca el servidor con el dataset ya cargado. El estado es de sólo lectura
/// y se comparte entre workers sin bloqueo.
pub async fn run_server(config: Config, estado: EstadoDataset) -> std::io::Result<()> {
    let estado = web::Data::new(estado);
    log::info!("iniciando servidor en http://{} ({} workers)", config.bind, config.workers);

    HttpServer::new(move || App::new().app_data(estado.clone()).configure(configurar_rutas))
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await
}
