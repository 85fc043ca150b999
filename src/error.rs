//! Tipo de error del crate.
//!
//! Los lectores (Excel, SQL) y los gráficos convierten sus errores a
//! `TableroError`; los handlers lo propagan con `?` y actix lo traduce a una
//! respuesta JSON `{"error": ...}` mediante `ResponseError`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum TableroError {
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("no se pudo leer el libro Excel: {0}")]
    Excel(#[from] calamine::Error),

    #[error("error de SQLite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("error de Postgres: {0}")]
    Postgres(#[from] postgres::Error),

    /// La tabla leída no tiene las columnas esperadas
    #[error("esquema inválido: {0}")]
    Esquema(String),

    #[error("configuración inválida: {0}")]
    Configuracion(String),

    /// Valor de filtro que no se puede interpretar (p. ej. un año no numérico)
    #[error("filtro inválido: {0}")]
    FiltroInvalido(String),

    #[error("no se pudo generar el gráfico: {0}")]
    Grafico(String),

    #[error("dataset no disponible: {0}")]
    DatasetNoDisponible(String),
}

impl ResponseError for TableroError {
    fn status_code(&self) -> StatusCode {
        match self {
            TableroError::FiltroInvalido(_) => StatusCode::BAD_REQUEST,
            TableroError::DatasetNoDisponible(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}
