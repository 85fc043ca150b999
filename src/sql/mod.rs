pub mod db;

pub use db::{leer_sqlite, leer_tabla_sql, resolver_conexion, ConexionDatos};
