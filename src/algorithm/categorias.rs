//! Clasificación del texto de resultado en `CategoriaResultado`.
//!
//! La regla es una tabla ordenada `(subcadena, categoría)`: gana la primera
//! subcadena contenida en el texto. La comparación distingue mayúsculas, de
//! modo que "Desfavorable" no contiene "Favorable".

use crate::models::CategoriaResultado;

/// Reglas en orden de prioridad (la primera que coincide gana)
pub const REGLAS_RESULTADO: [(&str, CategoriaResultado); 2] = [
    ("Favorable", CategoriaResultado::Favorable),
    ("Desfavorable", CategoriaResultado::Desfavorable),
];

/// Categoría para textos que no coinciden con ninguna regla
pub const CATEGORIA_POR_DEFECTO: CategoriaResultado = CategoriaResultado::MixtoOtro;

pub fn categorizar_resultado(resultado: &str) -> CategoriaResultado {
    REGLAS_RESULTADO
        .iter()
        .find(|(subcadena, _)| resultado.contains(subcadena))
        .map(|(_, categoria)| *categoria)
        .unwrap_or(CATEGORIA_POR_DEFECTO)
}
