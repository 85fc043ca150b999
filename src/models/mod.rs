// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Categoría derivada del texto de `Resultado_Causa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoriaResultado {
    Favorable,
    Desfavorable,
    #[serde(rename = "Mixto / Otro")]
    MixtoOtro,
}

impl CategoriaResultado {
    /// Orden fijo en que se ofrecen las categorías en el filtro de resultado
    pub const TODAS: [CategoriaResultado; 3] = [
        CategoriaResultado::Favorable,
        CategoriaResultado::Desfavorable,
        CategoriaResultado::MixtoOtro,
    ];

    /// Etiqueta visible; es también el valor que llega en el filtro `resultado`.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            CategoriaResultado::Favorable => "Favorable",
            CategoriaResultado::Desfavorable => "Desfavorable",
            CategoriaResultado::MixtoOtro => "Mixto / Otro",
        }
    }
}

/// Una fila del dataset = una sentencia.
#[derive(Debug, Clone, Serialize)]
pub struct Sentencia {
    pub archivo: Option<String>,
    pub departamento: String,
    pub tipo_derecho: String,
    pub anio: i32,
    pub resultado: String,
    pub categoria: CategoriaResultado,
    /// Conteos alineados con `Dataset::columnas_lemas`
    pub lemas: Vec<u64>,
}

impl Sentencia {
    pub fn es_favorable(&self) -> bool {
        self.categoria == CategoriaResultado::Favorable
    }
}
