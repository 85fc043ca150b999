use plotters::element::Pie;
use plotters::prelude::*;

use super::{a_error, aviso, color_categoria, ALTO, ANCHO, AVISO_SIN_DATOS, FUENTE};
use crate::algorithm::agregados::ConteoCategoria;
use crate::error::TableroError;

/// Gráfico de proporción de resultados con un color fijo por categoría.
pub fn grafico_pastel(distribucion: &[ConteoCategoria]) -> Result<String, TableroError> {
    if distribucion.iter().all(|c| c.cantidad == 0) {
        log::debug!("distribución vacía: se muestra el aviso");
        return Ok(aviso(AVISO_SIN_DATOS));
    }

    let tamanos: Vec<f64> = distribucion.iter().map(|c| c.cantidad as f64).collect();
    let colores: Vec<RGBColor> = distribucion.iter().map(|c| color_categoria(c.categoria)).collect();
    let etiquetas: Vec<String> = distribucion
        .iter()
        .map(|c| format!("{} ({})", c.categoria.etiqueta(), c.cantidad))
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (ANCHO, ALTO)).into_drawing_area();
        root.fill(&WHITE).map_err(a_error)?;
        let area = root.titled("Proporción de Resultados", (FUENTE, 20)).map_err(a_error)?;

        let (w, h) = area.dim_in_pixel();
        let centro = (w as i32 / 2, h as i32 / 2);
        let radio = f64::from(w.min(h)) * 0.33;

        let mut pastel = Pie::new(&centro, &radio, &tamanos[..], &colores[..], &etiquetas[..]);
        pastel.start_angle(-90.0);
        pastel.label_style((FUENTE, 15).into_font().color(&BLACK));
        pastel.percentages((FUENTE, 14).into_font().color(&WHITE));
        area.draw(&pastel).map_err(a_error)?;

        root.present().map_err(a_error)?;
    }
    Ok(svg)
}
