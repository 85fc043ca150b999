use plotters::prelude::*;

use super::{a_error, aviso, etiqueta_categoria, ALTO, ANCHO, AVISO_TENDENCIA, FUENTE};
use crate::algorithm::agregados::PuntoTendencia;
use crate::error::TableroError;

const AZUL: RGBColor = RGBColor(0x0d, 0x6e, 0xfd);
const ROJO: RGBColor = RGBColor(0xd6, 0x27, 0x28);

/// Barras con el total de casos por año (eje izquierdo) y línea con la tasa
/// de ganancia (eje derecho, 0-100 %). Los años son categorías, no un eje
/// numérico continuo. Con menos de dos años se devuelve el aviso.
pub fn grafico_tendencia(puntos: &[PuntoTendencia]) -> Result<String, TableroError> {
    if puntos.len() < 2 {
        log::debug!("tendencia con {} año(s): se muestra el aviso", puntos.len());
        return Ok(aviso(AVISO_TENDENCIA));
    }

    let n = puntos.len();
    let etiquetas: Vec<String> = puntos.iter().map(|p| p.anio.to_string()).collect();
    let max_total = puntos.iter().map(|p| p.total).max().unwrap_or(1).max(1) as f64;
    let rango_x = -0.5f64..(n as f64 - 0.5);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (ANCHO, ALTO)).into_drawing_area();
        root.fill(&WHITE).map_err(a_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Evolución Anual de Casos y Tasa de Ganancia", (FUENTE, 20))
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(55)
            .right_y_label_area_size(55)
            .build_cartesian_2d(rango_x.clone(), 0f64..max_total * 1.15)
            .map_err(a_error)?
            .set_secondary_coord(rango_x, 0f64..105f64);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&|x| etiqueta_categoria(*x, &etiquetas))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .y_desc("Total de Casos")
            .draw()
            .map_err(a_error)?;

        chart
            .configure_secondary_axes()
            .y_label_formatter(&|y| format!("{:.0}", y))
            .y_desc("Tasa de Ganancia (%)")
            .draw()
            .map_err(a_error)?;

        chart
            .draw_series(puntos.iter().enumerate().map(|(i, p)| {
                let x = i as f64;
                Rectangle::new([(x - 0.35, 0.0), (x + 0.35, p.total as f64)], AZUL.mix(0.7).filled())
            }))
            .map_err(a_error)?
            .label("Total de Casos")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], AZUL.mix(0.7).filled()));

        chart
            .draw_secondary_series(LineSeries::new(
                puntos.iter().enumerate().map(|(i, p)| (i as f64, p.tasa_ganancia)),
                ROJO.stroke_width(2),
            ))
            .map_err(a_error)?
            .label("Tasa de Ganancia (%)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], ROJO.stroke_width(2)));

        chart
            .draw_secondary_series(
                puntos
                    .iter()
                    .enumerate()
                    .map(|(i, p)| Circle::new((i as f64, p.tasa_ganancia), 4, ROJO.filled())),
            )
            .map_err(a_error)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(a_error)?;

        root.present().map_err(a_error)?;
    }
    Ok(svg)
}
