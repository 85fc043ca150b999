mod common;

use tablero_scj::algorithm::filters::{vista_base, vista_completa};
use tablero_scj::algorithm::{ParametrosFiltro, SeleccionFiltros, TODOS};
use tablero_scj::error::TableroError;

#[test]
fn test_vistas_son_subconjuntos_para_toda_combinacion() {
    let dataset = common::dataset_fixture();
    let op = dataset.opciones().clone();

    let con_desconocido = |v: &Vec<String>| {
        let mut v = v.clone();
        v.push("Valor Inexistente".to_string());
        v
    };
    let departamentos = con_desconocido(&op.departamentos);
    let resultados = con_desconocido(&op.resultados);
    let derechos = con_desconocido(&op.derechos);
    let mut anios = op.anios.clone();
    anios.push("1999".to_string());

    let mut combinaciones = 0usize;
    for d in &departamentos {
        for r in &resultados {
            for t in &derechos {
                for a in &anios {
                    let params = ParametrosFiltro {
                        departamento: d.clone(),
                        resultado: r.clone(),
                        derecho: t.clone(),
                        anio: a.clone(),
                    };
                    let sel = SeleccionFiltros::desde_parametros(&params).expect("filtros válidos");
                    let base = vista_base(dataset.sentencias(), &sel);
                    let completa = vista_completa(&base, &sel);

                    // base ⊆ dataset
                    for s in &base {
                        assert!(dataset.sentencias().iter().any(|x| std::ptr::eq(x, *s)));
                        assert!(sel.coincide_base(s));
                    }
                    // completa ⊆ base
                    for s in &completa {
                        assert!(base.iter().any(|x| std::ptr::eq(*x, *s)));
                        assert!(sel.coincide(s));
                    }
                    // nada que coincida queda fuera
                    let esperadas = dataset.sentencias().iter().filter(|s| sel.coincide(s)).count();
                    assert_eq!(completa.len(), esperadas);
                    combinaciones += 1;
                }
            }
        }
    }
    assert!(combinaciones > 100);
}

#[test]
fn test_todos_no_filtra() {
    let dataset = common::dataset_fixture();
    let sel = SeleccionFiltros::desde_parametros(&ParametrosFiltro::default()).unwrap();
    let base = vista_base(dataset.sentencias(), &sel);
    assert_eq!(base.len(), dataset.len());
    assert_eq!(vista_completa(&base, &sel).len(), dataset.len());
}

#[test]
fn test_filtro_anio_no_afecta_vista_base() {
    let dataset = common::dataset_fixture();
    let params = ParametrosFiltro { anio: "2020".into(), ..Default::default() };
    let sel = SeleccionFiltros::desde_parametros(&params).unwrap();
    let base = vista_base(dataset.sentencias(), &sel);
    let completa = vista_completa(&base, &sel);
    assert_eq!(base.len(), dataset.len());
    assert_eq!(completa.len(), 2);
    assert!(completa.iter().all(|s| s.anio == 2020));
}

#[test]
fn test_filtro_por_categoria_usa_etiqueta() {
    let dataset = common::dataset_fixture();
    let params = ParametrosFiltro { resultado: "Mixto / Otro".into(), ..Default::default() };
    let sel = SeleccionFiltros::desde_parametros(&params).unwrap();
    let base = vista_base(dataset.sentencias(), &sel);
    assert_eq!(base.len(), 1);
    assert_eq!(base[0].resultado, "Inadmisible");
}

#[test]
fn test_anio_no_numerico_es_error() {
    let params = ParametrosFiltro { anio: "abc".into(), ..Default::default() };
    match SeleccionFiltros::desde_parametros(&params) {
        Err(TableroError::FiltroInvalido(msg)) => assert!(msg.contains("abc")),
        other => panic!("se esperaba FiltroInvalido, llegó {:?}", other),
    }
    let params = ParametrosFiltro { anio: TODOS.into(), ..Default::default() };
    assert!(SeleccionFiltros::desde_parametros(&params).is_ok());
}
