//! Página HTML del tablero
//!
//! Genera un documento autocontenido (CSS embebido) con el formulario de
//! filtros, los KPIs, la narrativa y los fragmentos SVG de los gráficos.

mod narrativa;

pub use narrativa::narrativa;

use crate::algorithm::Resumen;
use crate::dataset::{Dataset, OpcionesFiltro};
use crate::graficos::Fragmentos;

/// Render the full dashboard page
pub fn render_tablero(resumen: &Resumen, fragmentos: &Fragmentos, dataset: &Dataset) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Análisis de Sentencias</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>Análisis de Sentencias</h1>
        {filtros}
        {kpis}
        <p class="narrativa">{narrativa}</p>
        <div class="grid">
            <div class="card">{pastel}</div>
            <div class="card">{lemas}</div>
            <div class="card">{mapa}</div>
            <div class="card">{tendencia}</div>
        </div>
        {footer}
    </div>
</body>
</html>"#,
        css = inline_css(),
        filtros = render_filtros(resumen, dataset.opciones()),
        kpis = render_kpis(resumen),
        narrativa = html_escape(&narrativa(resumen)),
        pastel = fragmentos.pastel,
        lemas = fragmentos.lemas,
        mapa = fragmentos.mapa,
        tendencia = fragmentos.tendencia,
        footer = render_footer(dataset),
    )
}

/// Página estática para cuando el dataset no pudo cargarse.
pub fn render_error(motivo: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head><meta charset="UTF-8"><title>Error</title><style>{css}</style></head>
<body>
    <div class="container">
        <h1>Error</h1>
        <p>No se pudo cargar el dataset de sentencias.</p>
        <p class="muted">{motivo}</p>
    </div>
</body>
</html>"#,
        css = inline_css(),
        motivo = html_escape(motivo),
    )
}

fn render_filtros(resumen: &Resumen, opciones: &OpcionesFiltro) -> String {
    let f = &resumen.filtros;
    format!(
        r#"<form method="get" action="/" class="filtros">
            {depto}
            {resultado}
            {derecho}
            {anio}
            <button type="submit">Aplicar</button>
        </form>"#,
        depto = render_select("departamento", "Departamento", &opciones.departamentos, &f.departamento),
        resultado = render_select("resultado", "Resultado", &opciones.resultados, &f.resultado),
        derecho = render_select("derecho", "Tipo de derecho", &opciones.derechos, &f.derecho),
        anio = render_select("año", "Año", &opciones.anios, &f.anio),
    )
}

fn render_select(nombre: &str, titulo: &str, opciones: &[String], seleccionado: &str) -> String {
    let opts: String = opciones
        .iter()
        .map(|o| {
            format!(
                r#"<option value="{v}"{sel}>{v}</option>"#,
                v = html_escape(o),
                sel = if o == seleccionado { " selected" } else { "" },
            )
        })
        .collect();
    format!(
        r#"<label>{titulo}<select name="{nombre}">{opts}</select></label>"#,
        titulo = html_escape(titulo),
        nombre = html_escape(nombre),
        opts = opts,
    )
}

fn render_kpis(resumen: &Resumen) -> String {
    let k = &resumen.kpis;
    format!(
        r#"<div class="kpis">
            <div class="kpi"><span class="valor">{total}</span><span class="titulo">Sentencias analizadas</span></div>
            <div class="kpi"><span class="valor">{favorables}</span><span class="titulo">Casos favorables</span></div>
            <div class="kpi"><span class="valor">{porcentaje:.1}%</span><span class="titulo">Tasa de ganancia</span></div>
        </div>"#,
        total = k.total,
        favorables = k.favorables,
        porcentaje = k.porcentaje,
    )
}

fn render_footer(dataset: &Dataset) -> String {
    format!(
        r#"<footer class="muted">{n} sentencias en el dataset ({d} filas descartadas por año inválido). Datos cargados el {ts}.</footer>"#,
        n = dataset.len(),
        d = dataset.descartadas(),
        ts = dataset.cargado_en().format("%Y-%m-%d %H:%M UTC"),
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; background: #f5f6f8; color: #212529; margin: 0; }
.container { max-width: 1320px; margin: 0 auto; padding: 24px; }
h1 { font-size: 1.6rem; margin-bottom: 16px; }
.filtros { display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 20px; }
.filtros label { display: flex; flex-direction: column; font-size: 0.85rem; gap: 4px; }
.filtros select, .filtros button { padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; }
.filtros button { background: #0d6efd; color: #fff; border-color: #0d6efd; cursor: pointer; }
.kpis { display: flex; gap: 16px; margin-bottom: 16px; }
.kpi { flex: 1; background: #fff; border-radius: 6px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.kpi .valor { display: block; font-size: 1.8rem; font-weight: 600; }
.kpi .titulo { color: #6c757d; font-size: 0.85rem; }
.narrativa { background: #fff; border-left: 4px solid #0d6efd; padding: 12px 16px; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(560px, 1fr)); gap: 16px; }
.card { background: #fff; border-radius: 6px; padding: 12px; box-shadow: 0 1px 3px rgba(0,0,0,.1); overflow-x: auto; }
.card h6 { color: #6c757d; font-size: 0.95rem; text-align: center; margin: 40px 0; }
.muted { color: #6c757d; font-size: 0.85rem; margin-top: 20px; }
"#
}
