use plotters::prelude::*;

use super::{a_error, aviso, etiqueta_categoria, ALTO, ANCHO, AVISO_SIN_DATOS, FUENTE};
use crate::algorithm::agregados::FrecuenciaLema;
use crate::error::TableroError;

const TURQUESA: RGBColor = RGBColor(0x17, 0xa2, 0xb8);

/// Barras horizontales con los conceptos más frecuentes. `lemas` ya viene en
/// orden ascendente, así que el mayor queda arriba.
pub fn grafico_lemas(lemas: &[FrecuenciaLema]) -> Result<String, TableroError> {
    if lemas.is_empty() {
        log::debug!("sin lemas con frecuencia positiva: se muestra el aviso");
        return Ok(aviso(AVISO_SIN_DATOS));
    }

    let n = lemas.len();
    let etiquetas: Vec<String> = lemas.iter().map(|l| l.etiqueta.clone()).collect();
    let max = lemas.iter().map(|l| l.total).max().unwrap_or(1).max(1) as f64;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (ANCHO, ALTO)).into_drawing_area();
        root.fill(&WHITE).map_err(a_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Top Conceptos Más Frecuentes", (FUENTE, 20))
            .margin(15)
            .x_label_area_size(30)
            .y_label_area_size(150)
            .build_cartesian_2d(0f64..max * 1.15, -0.5f64..(n as f64 - 0.5))
            .map_err(a_error)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(n)
            .y_label_formatter(&|y| etiqueta_categoria(*y, &etiquetas))
            .x_label_formatter(&|x| format!("{:.0}", x))
            .draw()
            .map_err(a_error)?;

        chart
            .draw_series(lemas.iter().enumerate().map(|(i, l)| {
                let y = i as f64;
                Rectangle::new([(0.0, y - 0.38), (l.total as f64, y + 0.38)], TURQUESA.filled())
            }))
            .map_err(a_error)?;

        // valor al final de cada barra
        chart
            .draw_series(lemas.iter().enumerate().map(|(i, l)| {
                Text::new(l.total.to_string(), (l.total as f64, i as f64), (FUENTE, 12).into_font())
            }))
            .map_err(a_error)?;

        root.present().map_err(a_error)?;
    }
    Ok(svg)
}
