/// Módulo de filtros sobre la tabla de sentencias
///
/// Los cuatro filtros (departamento, resultado, tipo de derecho y año) son
/// igualdades exactas que se combinan con AND. "Todos" desactiva el filtro.
/// Se producen dos vistas: la base (sin el filtro de año, para la tendencia
/// anual) y la completa (los cuatro filtros, para el resto del tablero).

use serde::{Deserialize, Serialize};

use crate::error::TableroError;
use crate::models::Sentencia;

/// Valor que desactiva un filtro
pub const TODOS: &str = "Todos";

fn todos() -> String {
    TODOS.to_string()
}

/// Parámetros tal como llegan en la query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametrosFiltro {
    #[serde(default = "todos")]
    pub departamento: String,
    #[serde(default = "todos")]
    pub resultado: String,
    #[serde(default = "todos")]
    pub derecho: String,
    #[serde(rename = "año", alias = "anio", default = "todos")]
    pub anio: String,
}

impl Default for ParametrosFiltro {
    fn default() -> Self {
        ParametrosFiltro { departamento: todos(), resultado: todos(), derecho: todos(), anio: todos() }
    }
}

/// Selección ya interpretada: `None` = sin filtro.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeleccionFiltros {
    pub departamento: Option<String>,
    pub resultado: Option<String>,
    pub derecho: Option<String>,
    pub anio: Option<i32>,
}

fn activo(valor: &str) -> Option<String> {
    if valor == TODOS { None } else { Some(valor.to_string()) }
}

impl SeleccionFiltros {
    /// Interpreta los parámetros. Un año distinto de "Todos" que no sea un
    /// entero es un error de la petición.
    pub fn desde_parametros(p: &ParametrosFiltro) -> Result<SeleccionFiltros, TableroError> {
        let anio = match activo(&p.anio) {
            None => None,
            Some(a) => Some(
                a.trim()
                    .parse::<i32>()
                    .map_err(|_| TableroError::FiltroInvalido(format!("año '{}' no es un entero", a)))?,
            ),
        };
        Ok(SeleccionFiltros {
            departamento: activo(&p.departamento),
            resultado: activo(&p.resultado),
            derecho: activo(&p.derecho),
            anio,
        })
    }

    /// Filtros de departamento, resultado y derecho (todos menos el año)
    pub fn coincide_base(&self, s: &Sentencia) -> bool {
        self.departamento.as_deref().is_none_or(|d| s.departamento == d)
            && self.resultado.as_deref().is_none_or(|r| s.categoria.etiqueta() == r)
            && self.derecho.as_deref().is_none_or(|d| s.tipo_derecho == d)
    }

    pub fn coincide_anio(&self, s: &Sentencia) -> bool {
        self.anio.is_none_or(|a| s.anio == a)
    }

    pub fn coincide(&self, s: &Sentencia) -> bool {
        self.coincide_base(s) && self.coincide_anio(s)
    }
}

/// Vista base: filas que pasan los filtros de departamento, resultado y derecho.
pub fn vista_base<'a>(sentencias: &'a [Sentencia], sel: &SeleccionFiltros) -> Vec<&'a Sentencia> {
    sentencias.iter().filter(|s| sel.coincide_base(s)).collect()
}

/// Vista completa a partir de la base: añade el filtro de año.
pub fn vista_completa<'a>(base: &[&'a Sentencia], sel: &SeleccionFiltros) -> Vec<&'a Sentencia> {
    base.iter().copied().filter(|s| sel.coincide_anio(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoriaResultado;

    fn sentencia(depto: &str, derecho: &str, anio: i32, cat: CategoriaResultado) -> Sentencia {
        Sentencia {
            archivo: None,
            departamento: depto.to_string(),
            tipo_derecho: derecho.to_string(),
            anio,
            resultado: cat.etiqueta().to_string(),
            categoria: cat,
            lemas: Vec::new(),
        }
    }

    #[test]
    fn todos_no_filtra() {
        let sel = SeleccionFiltros::desde_parametros(&ParametrosFiltro::default()).unwrap();
        assert_eq!(sel, SeleccionFiltros::default());
    }

    #[test]
    fn anio_invalido_es_error() {
        let p = ParametrosFiltro { anio: "dos mil".into(), ..Default::default() };
        assert!(matches!(SeleccionFiltros::desde_parametros(&p), Err(TableroError::FiltroInvalido(_))));
        let p = ParametrosFiltro { anio: " 2020 ".into(), ..Default::default() };
        assert_eq!(SeleccionFiltros::desde_parametros(&p).unwrap().anio, Some(2020));
    }

    #[test]
    fn vista_base_ignora_el_anio() {
        let datos = vec![
            sentencia("Santiago", "Civil", 2020, CategoriaResultado::Favorable),
            sentencia("Santiago", "Civil", 2021, CategoriaResultado::Favorable),
            sentencia("Azua", "Civil", 2020, CategoriaResultado::Favorable),
        ];
        let sel = SeleccionFiltros { departamento: Some("Santiago".into()), anio: Some(2020), ..Default::default() };
        let base = vista_base(&datos, &sel);
        assert_eq!(base.len(), 2);
        let completa = vista_completa(&base, &sel);
        assert_eq!(completa.len(), 1);
        assert_eq!(completa[0].anio, 2020);
    }

    #[test]
    fn resultado_compara_la_categoria() {
        let datos = vec![
            sentencia("Azua", "Civil", 2020, CategoriaResultado::MixtoOtro),
            sentencia("Azua", "Civil", 2020, CategoriaResultado::Desfavorable),
        ];
        let sel = SeleccionFiltros { resultado: Some("Mixto / Otro".into()), ..Default::default() };
        assert_eq!(vista_base(&datos, &sel).len(), 1);
        let sel = SeleccionFiltros { resultado: Some("Inexistente".into()), ..Default::default() };
        assert!(vista_base(&datos, &sel).is_empty());
    }
}
