use plotters::prelude::*;

use super::{a_error, aviso, ALTO, ANCHO, AVISO_GEOGRAFICO, FUENTE};
use crate::algorithm::agregados::PuntoGeografico;
use crate::algorithm::coordenadas::CENTRO_MAPA;
use crate::error::TableroError;

/// Semiamplitud del recuadro del mapa en grados (lat, lon)
const SEMI_LAT: f64 = 1.35;
const SEMI_LON: f64 = 1.95;
/// Radio máximo de burbuja en píxeles (diámetro 50)
const RADIO_MAX: f64 = 25.0;
const RADIO_MIN: f64 = 4.0;

/// Paradas de la escala Plasma (t = 0, 0.25, 0.5, 0.75, 1)
const PLASMA: [(u8, u8, u8); 5] = [
    (13, 8, 135),
    (126, 3, 168),
    (204, 71, 120),
    (248, 149, 64),
    (240, 249, 33),
];

/// Color de la escala para `t` en [0, 1]
pub fn color_plasma(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let pos = t * (PLASMA.len() - 1) as f64;
    let i = (pos.floor() as usize).min(PLASMA.len() - 2);
    let f = pos - i as f64;
    let (a, b) = (PLASMA[i], PLASMA[i + 1]);
    let mezcla = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
    RGBColor(mezcla(a.0, b.0), mezcla(a.1, b.1), mezcla(a.2, b.2))
}

/// Radio proporcional a la raíz del conteo (área proporcional al conteo).
pub fn radio_burbuja(cantidad: usize, max: usize) -> u32 {
    if max == 0 {
        return RADIO_MIN as u32;
    }
    let r = RADIO_MAX * (cantidad as f64 / max as f64).sqrt();
    r.max(RADIO_MIN).round() as u32
}

/// Mapa de burbujas: posición por (lon, lat), tamaño y color por cantidad.
pub fn grafico_mapa(puntos: &[PuntoGeografico]) -> Result<String, TableroError> {
    if puntos.is_empty() {
        log::debug!("sin departamentos con coordenadas: se muestra el aviso");
        return Ok(aviso(AVISO_GEOGRAFICO));
    }

    let max = puntos.iter().map(|p| p.cantidad).max().unwrap_or(0);
    let min = puntos.iter().map(|p| p.cantidad).min().unwrap_or(0);
    let normalizar = |c: usize| if max == min { 1.0 } else { (c - min) as f64 / (max - min) as f64 };
    let (lat0, lon0) = CENTRO_MAPA;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (ANCHO, ALTO)).into_drawing_area();
        root.fill(&WHITE).map_err(a_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Distribución Geográfica de Casos", (FUENTE, 20))
            .margin(15)
            .x_label_area_size(30)
            .y_label_area_size(45)
            .build_cartesian_2d((lon0 - SEMI_LON)..(lon0 + SEMI_LON), (lat0 - SEMI_LAT)..(lat0 + SEMI_LAT))
            .map_err(a_error)?;

        chart
            .configure_mesh()
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .x_desc("Longitud")
            .y_desc("Latitud")
            .draw()
            .map_err(a_error)?;

        // las burbujas grandes primero para que las pequeñas queden visibles encima
        chart
            .draw_series(puntos.iter().map(|p| {
                Circle::new(
                    (p.lon, p.lat),
                    radio_burbuja(p.cantidad, max),
                    color_plasma(normalizar(p.cantidad)).mix(0.75).filled(),
                )
            }))
            .map_err(a_error)?;

        chart
            .draw_series(puntos.iter().map(|p| {
                Text::new(format!("{} ({})", p.departamento, p.cantidad), (p.lon, p.lat), (FUENTE, 11).into_font())
            }))
            .map_err(a_error)?;

        root.present().map_err(a_error)?;
    }
    Ok(svg)
}
