#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use tablero_scj::dataset::{Celda, Dataset, TablaCruda};

pub const N_LEMAS: usize = 20;

fn texto(s: &str) -> Celda {
    Celda::Texto(s.to_string())
}

/// Tabla de prueba: 10 filas (una con año inválido), 20 columnas de lemas.
pub fn tabla_fixture() -> TablaCruda {
    let mut encabezados: Vec<String> = vec![
        "Archivo".into(),
        "Departamento_Judicial".into(),
        "Tipo_Derecho".into(),
        "Año".into(),
        "Resultado_Causa".into(),
    ];
    for i in 0..N_LEMAS {
        encabezados.push(format!("lema_concepto{:02}", i));
    }

    let filas_base: Vec<(&str, &str, Celda, &str)> = vec![
        ("Santiago", "Derecho al Trabajo", Celda::Real(2020.0), "Favorable"),
        ("Santiago", "Derecho al Trabajo", Celda::Real(2020.0), "Desfavorable"),
        ("Santiago", "Debido Proceso", Celda::Entero(2021), "Favorable al accionante"),
        ("Distrito Nacional", "Debido Proceso", Celda::Entero(2021), "Inadmisible"),
        ("Distrito Nacional", "Derecho al Trabajo", texto("2022"), "Desfavorable"),
        ("No Especificado", "Debido Proceso", Celda::Entero(2022), "Favorable"),
        ("Isla Saona", "Debido Proceso", Celda::Entero(2022), "Favorable"),
        ("La Vega", "Derecho al Trabajo", Celda::Entero(2019), "Parcialmente Favorable y Desfavorable"),
        ("La Vega", "Debido Proceso", texto("sin fecha"), "Favorable"),
        ("Azua", "Derecho al Trabajo", Celda::Real(2021.0), "Desfavorable"),
    ];

    let filas = filas_base
        .into_iter()
        .enumerate()
        .map(|(r, (depto, derecho, anio, resultado))| {
            let mut fila = vec![texto(&format!("sentencia_{}.pdf", r)), texto(depto), texto(derecho), anio, texto(resultado)];
            for l in 0..N_LEMAS {
                // el lema l aparece en la fila r si (r + l) es múltiplo de 3; los últimos dos nunca
                let v = if l < N_LEMAS - 2 && (r + l) % 3 == 0 { (l + 1) as i64 } else { 0 };
                fila.push(Celda::Entero(v));
            }
            fila
        })
        .collect();

    TablaCruda { encabezados, filas }
}

pub fn dataset_fixture() -> Dataset {
    Dataset::desde_tabla(tabla_fixture(), Utc::now()).expect("fixture válido")
}

fn escapar_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// "A", "B", ..., "Z", "AA", ...
fn letra_columna(mut i: usize) -> String {
    let mut letras = Vec::new();
    loop {
        letras.push((b'A' + (i % 26) as u8) as char);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    letras.iter().rev().collect()
}

fn hoja_xml(filas: &[Vec<Celda>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (r, fila) in filas.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, celda) in fila.iter().enumerate() {
            let referencia = format!("{}{}", letra_columna(c), r + 1);
            match celda {
                Celda::Vacia => {}
                Celda::Texto(t) => xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    referencia,
                    escapar_xml(t)
                )),
                Celda::Entero(v) => xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, referencia, v)),
                Celda::Real(v) => xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, referencia, v)),
                Celda::Booleano(b) => {
                    xml.push_str(&format!(r#"<c r="{}" t="b"><v>{}</v></c>"#, referencia, if *b { 1 } else { 0 }))
                }
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Escribe un libro .xlsx mínimo (sin estilos ni cadenas compartidas) con las
/// hojas dadas, en orden.
pub fn escribir_xlsx(path: &Path, hojas: &[(&str, Vec<Vec<Celda>>)]) {
    let archivo = std::fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(archivo);
    let opciones = zip::write::FileOptions::default();

    let mut tipos = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    let mut hojas_libro = String::new();
    let mut relaciones = String::new();
    for (i, (nombre, _)) in hojas.iter().enumerate() {
        let n = i + 1;
        tipos.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            n
        ));
        hojas_libro.push_str(&format!(r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#, escapar_xml(nombre), n, n));
        relaciones.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            n, n
        ));
    }
    tipos.push_str("</Types>");

    let partes: Vec<(String, String)> = vec![
        ("[Content_Types].xml".into(), tipos),
        (
            "_rels/.rels".into(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#.into(),
        ),
        (
            "xl/workbook.xml".into(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{}</sheets></workbook>"#,
                hojas_libro
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels".into(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
                relaciones
            ),
        ),
    ];
    for (nombre, contenido) in partes {
        zip.start_file(nombre, opciones).unwrap();
        zip.write_all(contenido.as_bytes()).unwrap();
    }
    for (i, (_, filas)) in hojas.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), opciones).unwrap();
        zip.write_all(hoja_xml(filas).as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}
