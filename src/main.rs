// --- Tablero de análisis de sentencias - Archivo principal ---

use tablero_scj::config::Config;
use tablero_scj::dataset::cargar_estado;
use tablero_scj::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Config primero: carga el .env, que puede traer RUST_LOG
    let config = Config::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("=== Tablero de Análisis de Sentencias ===");

    // Un fallo aquí deja el servicio en estado degradado hasta reiniciar
    let estado = cargar_estado(&config.origen);
    run_server(config, estado).await
}
