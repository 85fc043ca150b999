//! Gráficos del tablero como fragmentos SVG embebibles (plotters, backend SVG).
//!
//! Cada función recibe un agregado ya calculado y devuelve el `<svg>` o, si no
//! hay datos suficientes, un `<h6>` con el aviso correspondiente.

pub mod tendencia;
pub mod pastel;
pub mod lemas;
pub mod mapa;

pub use lemas::grafico_lemas;
pub use mapa::grafico_mapa;
pub use pastel::grafico_pastel;
pub use tendencia::grafico_tendencia;

use plotters::style::RGBColor;

use crate::algorithm::Resumen;
use crate::error::TableroError;
use crate::models::CategoriaResultado;

pub const ANCHO: u32 = 640;
pub const ALTO: u32 = 420;
pub const FUENTE: &str = "sans-serif";

pub const AVISO_SIN_DATOS: &str = "No hay datos para esta selección.";
pub const AVISO_TENDENCIA: &str = "No hay datos de tendencia para esta selección.";
pub const AVISO_GEOGRAFICO: &str = "No hay datos geográficos para esta selección.";

pub fn aviso(texto: &str) -> String {
    format!("<h6>{}</h6>", texto)
}

pub fn color_categoria(c: CategoriaResultado) -> RGBColor {
    match c {
        CategoriaResultado::Favorable => RGBColor(0x28, 0xa7, 0x45),
        CategoriaResultado::Desfavorable => RGBColor(0xdc, 0x35, 0x45),
        CategoriaResultado::MixtoOtro => RGBColor(0xff, 0xc1, 0x07),
    }
}

pub(crate) fn a_error<E: std::fmt::Display>(e: E) -> TableroError {
    TableroError::Grafico(e.to_string())
}

/// Etiqueta de un eje categórico dibujado sobre un rango continuo: sólo los
/// valores enteros dentro de `etiquetas` tienen texto.
pub(crate) fn etiqueta_categoria(x: f64, etiquetas: &[String]) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    etiquetas.get(i as usize).cloned().unwrap_or_default()
}

/// Fragmentos listos para insertar en la página
#[derive(Debug, Clone)]
pub struct Fragmentos {
    pub tendencia: String,
    pub pastel: String,
    pub lemas: String,
    pub mapa: String,
}

pub fn generar_fragmentos(resumen: &Resumen) -> Result<Fragmentos, TableroError> {
    Ok(Fragmentos {
        tendencia: grafico_tendencia(&resumen.tendencia)?,
        pastel: grafico_pastel(&resumen.distribucion)?,
        lemas: grafico_lemas(&resumen.lemas)?,
        mapa: grafico_mapa(&resumen.geografico)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etiquetas_solo_en_enteros() {
        let e = vec!["2019".to_string(), "2020".to_string()];
        assert_eq!(etiqueta_categoria(0.0, &e), "2019");
        assert_eq!(etiqueta_categoria(1.0000001, &e), "2020");
        assert_eq!(etiqueta_categoria(0.5, &e), "");
        assert_eq!(etiqueta_categoria(-1.0, &e), "");
        assert_eq!(etiqueta_categoria(2.0, &e), "");
    }
}
