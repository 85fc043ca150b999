//! Configuración leída del entorno (con `.env` si existe).
//!
//! Variables:
//! - `TABLERO_XLSX`: ruta del libro Excel (por defecto `analisis_final_definitivo.xlsx`)
//! - `TABLERO_HOJA`: hoja a leer dentro del libro (opcional, por defecto la primera)
//! - `TABLERO_DB_URL`: si está definida se usa la variante SQL en lugar del Excel
//! - `TABLERO_DB_TABLA`: tabla a consultar (por defecto `sentencias`)
//! - `TABLERO_BIND`: dirección de escucha (por defecto `127.0.0.1:8080`)
//! - `TABLERO_WORKERS`: número de workers de actix (por defecto, núcleos disponibles)

use std::env;
use std::path::PathBuf;

pub const XLSX_POR_DEFECTO: &str = "analisis_final_definitivo.xlsx";
pub const TABLA_POR_DEFECTO: &str = "sentencias";
pub const BIND_POR_DEFECTO: &str = "127.0.0.1:8080";

/// De dónde se cargan las sentencias
#[derive(Debug, Clone, PartialEq)]
pub enum Origen {
    Excel { ruta: PathBuf, hoja: Option<String> },
    Sql { url: String, tabla: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub origen: Origen,
    pub bind: String,
    pub workers: usize,
}

impl Config {
    /// Lee la configuración del entorno del proceso.
    pub fn from_env() -> Config {
        let _ = dotenv::dotenv();
        Config::desde_variables(|k| env::var(k).ok())
    }

    /// Versión parametrizable para pruebas: recibe la función que resuelve
    /// cada variable, sin tocar el entorno real.
    pub fn desde_variables<F>(var: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_vacia = |k: &str| var(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let origen = match no_vacia("TABLERO_DB_URL") {
            Some(url) => Origen::Sql {
                url,
                tabla: no_vacia("TABLERO_DB_TABLA").unwrap_or_else(|| TABLA_POR_DEFECTO.to_string()),
            },
            None => Origen::Excel {
                ruta: PathBuf::from(no_vacia("TABLERO_XLSX").unwrap_or_else(|| XLSX_POR_DEFECTO.to_string())),
                hoja: no_vacia("TABLERO_HOJA"),
            },
        };

        let workers = no_vacia("TABLERO_WORKERS")
            .and_then(|w| w.parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or_else(num_cpus::get);

        Config {
            origen,
            bind: no_vacia("TABLERO_BIND").unwrap_or_else(|| BIND_POR_DEFECTO.to_string()),
            workers,
        }
    }
}
