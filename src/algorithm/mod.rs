//! Núcleo analítico: filtros y agregados sobre la tabla en memoria.
//!
//! - `categorias`: regla ordenada texto de resultado -> categoría
//! - `coordenadas`: tabla estática departamento -> (lat, lon)
//! - `filters`: vistas base y completa según la selección del usuario
//! - `agregados`: tendencia, KPIs, distribución, lemas y conteo geográfico

pub mod categorias;
pub mod coordenadas;
pub mod filters;
pub mod agregados;

pub use agregados::{resumir, Resumen};
pub use filters::{ParametrosFiltro, SeleccionFiltros, TODOS};
