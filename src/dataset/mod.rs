//! Dataset de sentencias, cargado una sola vez al arrancar.
//!
//! Submódulos:
//! - `tabla`: tabla cruda (encabezados + celdas) que producen los lectores
//! - `cargador`: elige la fuente según la configuración y construye el `Dataset`

pub mod tabla;
pub mod cargador;

pub use cargador::{cargar_dataset, cargar_estado};
pub use tabla::{Celda, TablaCruda};

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::algorithm::categorias::categorizar_resultado;
use crate::algorithm::filters::TODOS;
use crate::error::TableroError;
use crate::models::{CategoriaResultado, Sentencia};

pub const COL_DEPARTAMENTO: &str = "Departamento_Judicial";
pub const COL_DERECHO: &str = "Tipo_Derecho";
pub const COL_ANIO: &str = "Año";
pub const COL_RESULTADO: &str = "Resultado_Causa";
pub const COL_ARCHIVO: &str = "Archivo";
/// Prefijo de las columnas de conteo de lemas
pub const PREFIJO_LEMA: &str = "lema_";

/// Listas de opciones de los selectores (cada una empieza por "Todos").
#[derive(Debug, Clone, Serialize)]
pub struct OpcionesFiltro {
    pub departamentos: Vec<String>,
    pub resultados: Vec<String>,
    pub derechos: Vec<String>,
    /// Años en orden descendente
    pub anios: Vec<String>,
}

/// Tabla inmutable de sentencias más los metadatos calculados al cargar.
#[derive(Debug, Clone)]
pub struct Dataset {
    sentencias: Vec<Sentencia>,
    columnas_lemas: Vec<String>,
    opciones: OpcionesFiltro,
    descartadas: usize,
    cargado_en: DateTime<Utc>,
}

impl Dataset {
    /// Construye el dataset a partir de una tabla cruda: descarta filas con año
    /// inválido, deriva la categoría de resultado y captura las columnas `lema_*`.
    pub fn desde_tabla(tabla: TablaCruda, cargado_en: DateTime<Utc>) -> Result<Dataset, TableroError> {
        let requerida = |nombre: &str| {
            tabla
                .indice(nombre)
                .ok_or_else(|| TableroError::Esquema(format!("falta la columna '{}'", nombre)))
        };
        let idx_depto = requerida(COL_DEPARTAMENTO)?;
        let idx_derecho = requerida(COL_DERECHO)?;
        let idx_anio = requerida(COL_ANIO)?;
        let idx_resultado = requerida(COL_RESULTADO)?;
        let idx_archivo = tabla.indice(COL_ARCHIVO);

        let lemas: Vec<(usize, String)> = tabla
            .encabezados
            .iter()
            .enumerate()
            .map(|(i, h)| (i, h.trim().to_string()))
            .filter(|(_, h)| h.starts_with(PREFIJO_LEMA))
            .collect();

        let celda = |fila: &Vec<Celda>, i: usize| fila.get(i).cloned().unwrap_or(Celda::Vacia);

        let mut sentencias = Vec::with_capacity(tabla.filas.len());
        let mut descartadas = 0usize;
        for fila in &tabla.filas {
            let anio = match celda(fila, idx_anio).como_anio() {
                Some(a) => a,
                None => {
                    descartadas += 1;
                    continue;
                }
            };
            let resultado = celda(fila, idx_resultado).como_texto();
            let archivo = idx_archivo
                .map(|i| celda(fila, i).como_texto())
                .filter(|s| !s.is_empty());
            sentencias.push(Sentencia {
                archivo,
                departamento: celda(fila, idx_depto).como_texto(),
                tipo_derecho: celda(fila, idx_derecho).como_texto(),
                anio,
                categoria: categorizar_resultado(&resultado),
                resultado,
                lemas: lemas.iter().map(|(i, _)| celda(fila, *i).como_conteo()).collect(),
            });
        }

        let opciones = calcular_opciones(&sentencias);
        Ok(Dataset {
            sentencias,
            columnas_lemas: lemas.into_iter().map(|(_, h)| h).collect(),
            opciones,
            descartadas,
            cargado_en,
        })
    }

    pub fn sentencias(&self) -> &[Sentencia] {
        &self.sentencias
    }

    /// Nombres de las columnas de lemas en el orden de la fuente
    pub fn columnas_lemas(&self) -> &[String] {
        &self.columnas_lemas
    }

    pub fn opciones(&self) -> &OpcionesFiltro {
        &self.opciones
    }

    /// Filas descartadas por año inválido durante la carga
    pub fn descartadas(&self) -> usize {
        self.descartadas
    }

    pub fn cargado_en(&self) -> DateTime<Utc> {
        self.cargado_en
    }

    pub fn len(&self) -> usize {
        self.sentencias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentencias.is_empty()
    }
}

fn calcular_opciones(sentencias: &[Sentencia]) -> OpcionesFiltro {
    let con_todos = |valores: Vec<String>| {
        let mut v = Vec::with_capacity(valores.len() + 1);
        v.push(TODOS.to_string());
        v.extend(valores);
        v
    };

    let departamentos: BTreeSet<&str> = sentencias.iter().map(|s| s.departamento.as_str()).collect();
    let derechos: BTreeSet<&str> = sentencias.iter().map(|s| s.tipo_derecho.as_str()).collect();
    let anios: BTreeSet<i32> = sentencias.iter().map(|s| s.anio).collect();

    OpcionesFiltro {
        departamentos: con_todos(departamentos.into_iter().map(String::from).collect()),
        resultados: con_todos(CategoriaResultado::TODAS.iter().map(|c| c.etiqueta().to_string()).collect()),
        derechos: con_todos(derechos.into_iter().map(String::from).collect()),
        anios: con_todos(anios.into_iter().rev().map(|a| a.to_string()).collect()),
    }
}

/// Estado del dataset tras el intento de carga. `NoDisponible` es permanente
/// durante toda la vida del proceso.
#[derive(Debug)]
pub enum EstadoDataset {
    Disponible(Dataset),
    NoDisponible { motivo: String },
}

impl EstadoDataset {
    pub fn dataset(&self) -> Result<&Dataset, TableroError> {
        match self {
            EstadoDataset::Disponible(d) => Ok(d),
            EstadoDataset::NoDisponible { motivo } => Err(TableroError::DatasetNoDisponible(motivo.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texto(s: &str) -> Celda {
        Celda::Texto(s.to_string())
    }

    fn tabla() -> TablaCruda {
        TablaCruda {
            encabezados: vec![
                "Archivo".into(), "Departamento_Judicial".into(), "Tipo_Derecho".into(),
                "Año".into(), "Resultado_Causa".into(), "lema_amparo".into(), "otra".into(), "lema_debido".into(),
            ],
            filas: vec![
                vec![texto("a.pdf"), texto("Santiago"), texto("Laboral"), Celda::Real(2020.0), texto("Favorable"), Celda::Real(2.0), texto("x"), Celda::Vacia],
                vec![texto("b.pdf"), texto("La Vega"), texto("Civil"), texto("s/f"), texto("Desfavorable"), Celda::Real(1.0), texto("x"), Celda::Real(1.0)],
                vec![Celda::Vacia, texto("Azua"), texto("Civil"), Celda::Entero(2019), texto("Inadmisible"), Celda::Entero(0), texto("y"), Celda::Entero(4)],
            ],
        }
    }

    #[test]
    fn descarta_anios_invalidos_y_deriva_categoria() {
        let ds = Dataset::desde_tabla(tabla(), Utc::now()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.descartadas(), 1);
        assert_eq!(ds.columnas_lemas(), &["lema_amparo".to_string(), "lema_debido".to_string()]);
        let s = &ds.sentencias()[1];
        assert_eq!(s.anio, 2019);
        assert_eq!(s.categoria, CategoriaResultado::MixtoOtro);
        assert_eq!(s.lemas, vec![0, 4]);
        assert_eq!(s.archivo, None);
        assert_eq!(ds.sentencias()[0].archivo.as_deref(), Some("a.pdf"));
    }

    #[test]
    fn opciones_ordenadas_con_todos() {
        let ds = Dataset::desde_tabla(tabla(), Utc::now()).unwrap();
        let op = ds.opciones();
        // La Vega se descartó junto con su fila
        assert_eq!(op.departamentos, vec!["Todos", "Azua", "Santiago"]);
        assert_eq!(op.derechos, vec!["Todos", "Civil", "Laboral"]);
        assert_eq!(op.anios, vec!["Todos", "2020", "2019"]);
        assert_eq!(op.resultados, vec!["Todos", "Favorable", "Desfavorable", "Mixto / Otro"]);
    }

    #[test]
    fn anio_con_separador_de_miles_se_descarta() {
        let mut t = tabla();
        t.filas.truncate(1);
        t.filas[0][3] = texto("2,020");
        t.filas[0][5] = texto("1,000");
        let ds = Dataset::desde_tabla(t, Utc::now()).unwrap();
        assert_eq!(ds.len(), 0);
        assert_eq!(ds.descartadas(), 1);
        assert_eq!(ds.opciones().anios, vec!["Todos"]);
    }

    #[test]
    fn falta_columna_requerida() {
        let mut t = tabla();
        t.encabezados[3] = "Anio".into();
        match Dataset::desde_tabla(t, Utc::now()) {
            Err(TableroError::Esquema(m)) => assert!(m.contains("Año")),
            other => panic!("se esperaba error de esquema, se obtuvo {:?}", other.map(|d| d.len())),
        }
    }
}
