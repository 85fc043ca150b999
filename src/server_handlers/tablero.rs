use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::algorithm::{resumir, ParametrosFiltro, SeleccionFiltros};
use crate::dataset::EstadoDataset;
use crate::error::TableroError;
use crate::graficos::generar_fragmentos;
use crate::pagina::{render_error, render_tablero};

/// GET /
/// Parámetros (todos opcionales, "Todos" por defecto): departamento,
/// resultado, derecho, año.
pub async fn tablero_handler(
    estado: web::Data<EstadoDataset>,
    query: web::Query<ParametrosFiltro>,
) -> Result<HttpResponse, TableroError> {
    let dataset = match estado.get_ref() {
        EstadoDataset::Disponible(d) => d,
        EstadoDataset::NoDisponible { motivo } => {
            return Ok(HttpResponse::ServiceUnavailable()
                .content_type(ContentType::html())
                .body(render_error(motivo)));
        }
    };

    let params = query.into_inner();
    let seleccion = SeleccionFiltros::desde_parametros(&params)?;
    log::debug!("tablero con filtros {:?}", seleccion);

    let resumen = resumir(dataset, &seleccion, params);
    let fragmentos = generar_fragmentos(&resumen)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_tablero(&resumen, &fragmentos, dataset)))
}

/// GET /api/resumen
/// Mismos parámetros que `/`; devuelve los agregados en JSON.
pub async fn resumen_handler(
    estado: web::Data<EstadoDataset>,
    query: web::Query<ParametrosFiltro>,
) -> Result<HttpResponse, TableroError> {
    let dataset = estado.dataset()?;
    let params = query.into_inner();
    let seleccion = SeleccionFiltros::desde_parametros(&params)?;
    log::debug!("resumen JSON con filtros {:?}", seleccion);

    Ok(HttpResponse::Ok().json(resumir(dataset, &seleccion, params)))
}
