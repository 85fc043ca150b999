//! Agregados del tablero: tendencia anual, KPIs, distribución de resultados,
//! frecuencia de lemas y conteo geográfico.
//!
//! Todas las funciones son puras sobre una vista (`&[&Sentencia]`).

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::algorithm::coordenadas::{coordenadas_de, DEPARTAMENTO_NO_ESPECIFICADO};
use crate::algorithm::filters::{vista_base, vista_completa, ParametrosFiltro, SeleccionFiltros};
use crate::dataset::{Dataset, PREFIJO_LEMA};
use crate::models::{CategoriaResultado, Sentencia};

/// Máximo de conceptos en el ranking de lemas
pub const TOP_LEMAS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuntoTendencia {
    pub anio: i32,
    pub total: usize,
    pub favorables: usize,
    /// favorables / total * 100, redondeado a un decimal
    pub tasa_ganancia: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total: usize,
    pub favorables: usize,
    pub porcentaje: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConteoCategoria {
    pub categoria: CategoriaResultado,
    pub cantidad: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrecuenciaLema {
    pub columna: String,
    pub etiqueta: String,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuntoGeografico {
    pub departamento: String,
    pub lat: f64,
    pub lon: f64,
    pub cantidad: usize,
}

/// Todos los agregados de una petición.
#[derive(Debug, Clone, Serialize)]
pub struct Resumen {
    pub filtros: ParametrosFiltro,
    pub kpis: Kpis,
    pub distribucion: Vec<ConteoCategoria>,
    /// En orden ascendente (listo para el gráfico de barras horizontal)
    pub lemas: Vec<FrecuenciaLema>,
    pub geografico: Vec<PuntoGeografico>,
    pub tendencia: Vec<PuntoTendencia>,
}

pub fn redondear_1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Porcentaje con un decimal; 0 cuando el total es 0.
pub fn porcentaje(parte: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    redondear_1(parte as f64 / total as f64 * 100.0)
}

/// Agrupa por año (ascendente) con total, favorables y tasa de ganancia.
pub fn tendencia_anual(vista: &[&Sentencia]) -> Vec<PuntoTendencia> {
    let mut por_anio: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for s in vista {
        let e = por_anio.entry(s.anio).or_default();
        e.0 += 1;
        if s.es_favorable() {
            e.1 += 1;
        }
    }
    por_anio
        .into_iter()
        .map(|(anio, (total, favorables))| PuntoTendencia {
            anio,
            total,
            favorables,
            tasa_ganancia: porcentaje(favorables, total),
        })
        .collect()
}

pub fn calcular_kpis(vista: &[&Sentencia]) -> Kpis {
    let total = vista.len();
    let favorables = vista.iter().filter(|s| s.es_favorable()).count();
    Kpis { total, favorables, porcentaje: porcentaje(favorables, total) }
}

/// Conteo por categoría, mayor primero; las categorías sin filas no aparecen.
pub fn distribucion_resultados(vista: &[&Sentencia]) -> Vec<ConteoCategoria> {
    let mut conteos: Vec<ConteoCategoria> = CategoriaResultado::TODAS
        .iter()
        .map(|c| ConteoCategoria {
            categoria: *c,
            cantidad: vista.iter().filter(|s| s.categoria == *c).count(),
        })
        .filter(|c| c.cantidad > 0)
        .collect();
    // sort estable: a igual cantidad se conserva el orden de TODAS
    conteos.sort_by(|a, b| b.cantidad.cmp(&a.cantidad));
    conteos
}

/// "lema_debido_proceso" -> "Debido_proceso"
pub fn etiqueta_lema(columna: &str) -> String {
    let sin_prefijo = columna.replace(PREFIJO_LEMA, "");
    let mut chars = sin_prefijo.chars();
    match chars.next() {
        Some(primera) => primera.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Suma cada columna de lemas, conserva las de suma positiva, toma las
/// `TOP_LEMAS` mayores y las devuelve en orden ascendente.
pub fn frecuencia_lemas(vista: &[&Sentencia], columnas: &[String]) -> Vec<FrecuenciaLema> {
    let mut sumas = vec![0u64; columnas.len()];
    for s in vista {
        for (acc, v) in sumas.iter_mut().zip(s.lemas.iter()) {
            *acc += *v;
        }
    }

    let mut ranking: Vec<(usize, u64)> = sumas.into_iter().enumerate().filter(|(_, t)| *t > 0).collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking.truncate(TOP_LEMAS);
    ranking.reverse();

    ranking
        .into_iter()
        .map(|(i, total)| FrecuenciaLema {
            columna: columnas[i].clone(),
            etiqueta: etiqueta_lema(&columnas[i]),
            total,
        })
        .collect()
}

/// Casos por departamento con coordenadas conocidas, mayor primero.
pub fn conteo_geografico(vista: &[&Sentencia]) -> Vec<PuntoGeografico> {
    let mut conteos: HashMap<&str, usize> = HashMap::new();
    for s in vista {
        if s.departamento != DEPARTAMENTO_NO_ESPECIFICADO {
            *conteos.entry(s.departamento.as_str()).or_default() += 1;
        }
    }

    let mut puntos: Vec<PuntoGeografico> = conteos
        .into_iter()
        .filter_map(|(depto, cantidad)| {
            coordenadas_de(depto).map(|(lat, lon)| PuntoGeografico {
                departamento: depto.to_string(),
                lat,
                lon,
                cantidad,
            })
        })
        .collect();
    puntos.sort_by(|a, b| b.cantidad.cmp(&a.cantidad).then_with(|| a.departamento.cmp(&b.departamento)));
    puntos
}

/// Calcula todos los agregados de una petición a partir del dataset completo.
pub fn resumir(dataset: &Dataset, sel: &SeleccionFiltros, filtros: ParametrosFiltro) -> Resumen {
    let base = vista_base(dataset.sentencias(), sel);
    let completa = vista_completa(&base, sel);

    Resumen {
        filtros,
        kpis: calcular_kpis(&completa),
        distribucion: distribucion_resultados(&completa),
        lemas: frecuencia_lemas(&completa, dataset.columnas_lemas()),
        geografico: conteo_geografico(&completa),
        tendencia: tendencia_anual(&base),
    }
}
