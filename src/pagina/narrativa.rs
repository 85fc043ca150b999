use crate::algorithm::{Resumen, TODOS};

/// Párrafo de lectura rápida a partir de los agregados ya calculados.
pub fn narrativa(resumen: &Resumen) -> String {
    let k = &resumen.kpis;
    if k.total == 0 {
        return "No hay sentencias que coincidan con la selección actual.".to_string();
    }

    let f = &resumen.filtros;
    let mut ambito = String::new();
    if f.departamento != TODOS {
        ambito.push_str(&format!(" del departamento judicial {}", f.departamento));
    }
    if f.derecho != TODOS {
        ambito.push_str(&format!(" sobre {}", f.derecho));
    }
    if f.anio != TODOS {
        ambito.push_str(&format!(" dictadas en {}", f.anio));
    }
    if f.resultado != TODOS {
        ambito.push_str(&format!(" con resultado {}", f.resultado));
    }

    let mut texto = format!(
        "Se analizaron {} sentencias{}. De ellas, {} ({:.1} %) resultaron favorables.",
        k.total, ambito, k.favorables, k.porcentaje
    );
    if let Some(top) = resumen.lemas.last() {
        texto.push_str(&format!(
            " El concepto más frecuente es «{}», con {} menciones.",
            top.etiqueta, top.total
        ));
    }
    if let Some(depto) = resumen.geografico.first() {
        texto.push_str(&format!(
            " {} concentra la mayor cantidad de casos ({}).",
            depto.departamento, depto.cantidad
        ));
    }
    texto
}
