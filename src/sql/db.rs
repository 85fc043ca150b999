use rusqlite::types::ValueRef;
use rusqlite::Connection;
use std::fmt;
use std::path::PathBuf;

// Postgres client for remote DB support
use postgres::types::Type;
use postgres::{Client, NoTls};

use crate::dataset::{Celda, TablaCruda};
use crate::error::TableroError;

/// Conexión de sólo lectura al origen SQL. Para Postgres guardamos la URL y
/// conectamos en un hilo dedicado: el cliente síncrono arranca su propio
/// runtime y no puede hacerlo dentro del de actix.
pub enum ConexionDatos {
    Sqlite(PathBuf),
    /// Contiene la URL completa (postgres://...)
    PostgresConfig(String),
}

impl fmt::Debug for ConexionDatos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConexionDatos::Sqlite(p) => write!(f, "ConexionDatos::Sqlite({})", p.display()),
            ConexionDatos::PostgresConfig(_) => write!(f, "ConexionDatos::PostgresConfig(..)"),
        }
    }
}

/// Interpreta la cadena de conexión. Acepta sqlite://, file://, postgres:// y postgresql://.
pub fn resolver_conexion(url: &str) -> Result<ConexionDatos, TableroError> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        Ok(ConexionDatos::Sqlite(PathBuf::from(path)))
    } else if let Some(path) = url.strip_prefix("file://") {
        Ok(ConexionDatos::Sqlite(PathBuf::from(path)))
    } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        Ok(ConexionDatos::PostgresConfig(url.to_string()))
    } else {
        Err(TableroError::Configuracion(format!("TABLERO_DB_URL usa un esquema no soportado: {}", url)))
    }
}

/// Sólo se aceptan identificadores simples (opcionalmente `esquema.tabla`),
/// porque el nombre de la tabla se interpola en la consulta.
pub fn validar_tabla(tabla: &str) -> Result<(), TableroError> {
    let valido = !tabla.is_empty()
        && tabla.split('.').count() <= 2
        && tabla.split('.').all(|parte| {
            !parte.is_empty()
                && !parte.starts_with(|c: char| c.is_ascii_digit())
                && parte.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valido {
        Ok(())
    } else {
        Err(TableroError::Configuracion(format!("nombre de tabla inválido: '{}'", tabla)))
    }
}

/// Ejecuta `SELECT * FROM <tabla>` una sola vez y devuelve todas las filas.
pub fn leer_tabla_sql(url: &str, tabla: &str) -> Result<TablaCruda, TableroError> {
    validar_tabla(tabla)?;
    let consulta = format!("SELECT * FROM {}", tabla);
    match resolver_conexion(url)? {
        ConexionDatos::Sqlite(path) => {
            if !path.exists() {
                return Err(TableroError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no existe la base SQLite '{}'", path.display()),
                )));
            }
            let conn = Connection::open_with_flags(&path, rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY)?;
            leer_sqlite(&conn, &consulta)
        }
        ConexionDatos::PostgresConfig(url) => {
            let handle = std::thread::spawn(move || -> Result<TablaCruda, postgres::Error> {
                let mut client = Client::connect(&url, NoTls)?;
                leer_postgres(&mut client, &consulta)
            });
            match handle.join() {
                Ok(res) => Ok(res?),
                Err(e) => Err(TableroError::Configuracion(format!("thread join error: {:?}", e))),
            }
        }
    }
}

pub fn leer_sqlite(conn: &Connection, consulta: &str) -> Result<TablaCruda, TableroError> {
    let mut stmt = conn.prepare(consulta)?;
    let encabezados: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let n = encabezados.len();

    let mut filas = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut celdas = Vec::with_capacity(n);
        for i in 0..n {
            let celda = match row.get_ref(i)? {
                ValueRef::Null => Celda::Vacia,
                ValueRef::Integer(v) => Celda::Entero(v),
                ValueRef::Real(v) => Celda::Real(v),
                ValueRef::Text(t) => Celda::Texto(String::from_utf8_lossy(t).trim().to_string()),
                ValueRef::Blob(_) => Celda::Vacia,
            };
            celdas.push(celda);
        }
        filas.push(celdas);
    }
    Ok(TablaCruda { encabezados, filas })
}

/// Tipos de Postgres con conversión directa a `Celda`.
const TIPOS_SOPORTADOS: [Type; 10] = [
    Type::INT2,
    Type::INT4,
    Type::INT8,
    Type::FLOAT4,
    Type::FLOAT8,
    Type::BOOL,
    Type::TEXT,
    Type::VARCHAR,
    Type::BPCHAR,
    Type::NAME,
];

/// Columnas cuyo tipo no tiene conversión: sus valores se leen vacíos.
fn columnas_sin_conversion(columnas: &[(String, Type)]) -> Vec<&(String, Type)> {
    columnas.iter().filter(|(_, ty)| !TIPOS_SOPORTADOS.contains(ty)).collect()
}

fn leer_postgres(client: &mut Client, consulta: &str) -> Result<TablaCruda, postgres::Error> {
    let rows = client.query(consulta, &[])?;
    let columnas: Vec<(String, Type)> = match rows.first() {
        Some(r) => r.columns().iter().map(|c| (c.name().to_string(), c.type_().clone())).collect(),
        // sin filas: pedimos sólo la descripción de columnas
        None => client.prepare(consulta)?.columns().iter().map(|c| (c.name().to_string(), c.type_().clone())).collect(),
    };
    for (nombre, ty) in columnas_sin_conversion(&columnas) {
        log::warn!("la columna '{}' es de tipo '{}' sin conversión; sus valores se leerán vacíos", nombre, ty.name());
    }
    let encabezados: Vec<String> = columnas.into_iter().map(|(nombre, _)| nombre).collect();

    let mut filas = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut celdas = Vec::with_capacity(encabezados.len());
        for (i, col) in row.columns().iter().enumerate() {
            let ty = col.type_();
            let celda = if *ty == Type::INT2 {
                row.try_get::<_, Option<i16>>(i)?.map(|v| Celda::Entero(v as i64))
            } else if *ty == Type::INT4 {
                row.try_get::<_, Option<i32>>(i)?.map(|v| Celda::Entero(v as i64))
            } else if *ty == Type::INT8 {
                row.try_get::<_, Option<i64>>(i)?.map(Celda::Entero)
            } else if *ty == Type::FLOAT4 {
                row.try_get::<_, Option<f32>>(i)?.map(|v| Celda::Real(v as f64))
            } else if *ty == Type::FLOAT8 {
                row.try_get::<_, Option<f64>>(i)?.map(Celda::Real)
            } else if *ty == Type::BOOL {
                row.try_get::<_, Option<bool>>(i)?.map(Celda::Booleano)
            } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME {
                row.try_get::<_, Option<String>>(i)?.map(|s| Celda::Texto(s.trim().to_string()))
            } else {
                None
            };
            celdas.push(celda.unwrap_or(Celda::Vacia));
        }
        filas.push(celdas);
    }
    Ok(TablaCruda { encabezados, filas })
}
