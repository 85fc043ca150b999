use chrono::Utc;

use crate::config::Origen;
use crate::dataset::{Dataset, EstadoDataset, TablaCruda};
use crate::error::TableroError;
use crate::excel::leer_tabla_excel;
use crate::sql::leer_tabla_sql;

/// Lee todas las filas del origen y construye el dataset. Sin reintentos.
pub fn cargar_dataset(origen: &Origen) -> Result<Dataset, TableroError> {
    let tabla: TablaCruda = match origen {
        Origen::Excel { ruta, hoja } => {
            log::info!("leyendo sentencias desde {}", ruta.display());
            leer_tabla_excel(ruta, hoja.as_deref())?
        }
        Origen::Sql { url, tabla } => {
            log::info!("leyendo sentencias desde la tabla SQL '{}'", tabla);
            leer_tabla_sql(url, tabla)?
        }
    };

    let leidas = tabla.filas.len();
    let dataset = Dataset::desde_tabla(tabla, Utc::now())?;
    log::info!(
        "dataset cargado: {} filas leídas, {} válidas, {} descartadas por año inválido, {} columnas de lemas",
        leidas,
        dataset.len(),
        dataset.descartadas(),
        dataset.columnas_lemas().len()
    );
    Ok(dataset)
}

/// Igual que `cargar_dataset` pero convierte el fallo en el estado degradado
/// `NoDisponible`, que dura toda la vida del proceso.
pub fn cargar_estado(origen: &Origen) -> EstadoDataset {
    match cargar_dataset(origen) {
        Ok(d) => EstadoDataset::Disponible(d),
        Err(e) => {
            log::error!("no se pudo cargar el dataset: {}", e);
            EstadoDataset::NoDisponible { motivo: e.to_string() }
        }
    }
}
