//! Lectura del libro Excel de sentencias.
//!
//! Submódulos:
//! - `io`: conversión de celdas de calamine y lectura de la hoja como `TablaCruda`

mod io;

pub use io::{data_to_celda, filas_a_tabla, leer_tabla_excel};
