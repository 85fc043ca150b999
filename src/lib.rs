// Biblioteca raíz del crate `tablero_scj`.
// Carga el dataset de sentencias una vez, aplica los filtros de cada petición,
// calcula los agregados y los entrega como página HTML o JSON.
pub mod error;
pub mod config;
pub mod models;
pub mod dataset;
pub mod excel;
pub mod sql;
pub mod algorithm;
pub mod graficos;
pub mod pagina;
pub mod server_handlers;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
pub use error::TableroError;
