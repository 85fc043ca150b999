use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::ParametrosFiltro;

pub async fn help_handler() -> impl Responder {
    let example = ParametrosFiltro {
        departamento: "Santiago".to_string(),
        resultado: "Favorable".to_string(),
        derecho: "Derecho al Trabajo".to_string(),
        anio: "2021".to_string(),
    };

    let help = json!({
        "description": "Tablero de análisis de sentencias. GET / devuelve la página HTML con KPIs y gráficos; GET /api/resumen devuelve los mismos agregados en JSON. Todos los parámetros son opcionales y 'Todos' desactiva el filtro.",
        "parametros": {
            "departamento": "Departamento judicial (igualdad exacta)",
            "resultado": "Favorable | Desfavorable | Mixto / Otro",
            "derecho": "Tipo de derecho (igualdad exacta)",
            "año": "Año entero; también se acepta 'anio'"
        },
        "example": example,
        "get_example_query": "/api/resumen?departamento=Santiago&resultado=Favorable&a%C3%B1o=2021",
        "note": "El filtro de año no se aplica a la tendencia anual, que sólo usa departamento, resultado y derecho."
    });

    HttpResponse::Ok().json(help)
}
