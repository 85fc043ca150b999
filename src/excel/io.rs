use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::dataset::{Celda, TablaCruda};
use crate::error::TableroError;

/// Convierte un `Data` de calamine a `Celda`
pub fn data_to_celda(d: &Data) -> Celda {
    match d {
        Data::String(s) => {
            let t = s.trim();
            if t.is_empty() { Celda::Vacia } else { Celda::Texto(t.to_string()) }
        }
        Data::Float(f) => Celda::Real(*f),
        Data::Int(i) => Celda::Entero(*i),
        Data::Bool(b) => Celda::Booleano(*b),
        Data::Empty => Celda::Vacia,
        Data::Error(_) => Celda::Vacia,
        Data::DateTime(s) => Celda::Texto(s.to_string()),
        Data::DateTimeIso(s) => Celda::Texto(s.clone()),
        Data::DurationIso(s) => Celda::Texto(s.clone()),
    }
}

/// Arma la tabla cruda a partir de las filas de una hoja: la primera fila es
/// el encabezado; las filas completamente vacías se ignoran.
pub fn filas_a_tabla<'a, I>(mut filas: I) -> TablaCruda
where
    I: Iterator<Item = &'a [Data]>,
{
    let encabezados: Vec<String> = match filas.next() {
        Some(h) => h.iter().map(|c| data_to_celda(c).como_texto()).collect(),
        None => return TablaCruda::default(),
    };

    let mut tabla = TablaCruda { encabezados, filas: Vec::new() };
    for fila in filas {
        let celdas: Vec<Celda> = fila.iter().map(data_to_celda).collect();
        if celdas.iter().all(|c| *c == Celda::Vacia) {
            continue;
        }
        tabla.filas.push(celdas);
    }
    tabla
}

/// Lee una hoja del libro (xlsx/xls/ods) como `TablaCruda`.
/// Si `hoja` es `None` o no existe en el libro se usa la primera hoja.
pub fn leer_tabla_excel<P: AsRef<Path>>(path: P, hoja: Option<&str>) -> Result<TablaCruda, TableroError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TableroError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no se encontró el archivo '{}'", path.display()),
        )));
    }
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let primera = names.first().cloned().ok_or_else(|| TableroError::Esquema("el libro no tiene hojas".to_string()))?;
    let sheet_to_use = match hoja {
        Some(h) if names.iter().any(|n| n == h) => h.to_string(),
        Some(h) => {
            log::warn!("la hoja '{}' no existe en {}; se usa '{}'", h, path.display(), primera);
            primera
        }
        None => primera,
    };

    let range = workbook.worksheet_range(&sheet_to_use)?;
    Ok(filas_a_tabla(range.rows()))
}
