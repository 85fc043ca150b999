//! Tabla cruda común a todas las fuentes (Excel y SQL).
//!
//! Cada lector produce una `TablaCruda` (encabezados + celdas) y
//! `Dataset::desde_tabla` la convierte; así las dos variantes de carga no
//! pueden divergir en la interpretación de las columnas.

#[derive(Debug, Clone, PartialEq)]
pub enum Celda {
    Vacia,
    Texto(String),
    Entero(i64),
    Real(f64),
    Booleano(bool),
}

impl Celda {
    /// Texto de la celda; los reales enteros se muestran sin decimales.
    pub fn como_texto(&self) -> String {
        match self {
            Celda::Vacia => String::new(),
            Celda::Texto(s) => s.trim().to_string(),
            Celda::Entero(i) => i.to_string(),
            Celda::Real(f) => {
                if f.is_finite() && (f.floor() - f).abs() < f64::EPSILON {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            Celda::Booleano(b) => b.to_string(),
        }
    }

    /// Coerción numérica: enteros, reales finitos y textos numéricos.
    /// Cualquier otra cosa es `None` (valor inválido).
    pub fn como_numero(&self) -> Option<f64> {
        let v = match self {
            Celda::Entero(i) => *i as f64,
            Celda::Real(f) => *f,
            Celda::Texto(s) => s.trim().parse::<f64>().ok()?,
            Celda::Vacia | Celda::Booleano(_) => return None,
        };
        if v.is_finite() { Some(v) } else { None }
    }

    /// Año como entero (truncado); `None` si no es numérico o no cabe en i32.
    pub fn como_anio(&self) -> Option<i32> {
        let v = self.como_numero()?.trunc();
        if v < i32::MIN as f64 || v > i32::MAX as f64 {
            return None;
        }
        Some(v as i32)
    }

    /// Conteo no negativo; vacíos y no numéricos cuentan 0.
    pub fn como_conteo(&self) -> u64 {
        match self.como_numero() {
            Some(v) if v > 0.0 => v.trunc() as u64,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TablaCruda {
    pub encabezados: Vec<String>,
    pub filas: Vec<Vec<Celda>>,
}

impl TablaCruda {
    /// Índice de la columna con ese encabezado (comparación tras `trim`).
    pub fn indice(&self, nombre: &str) -> Option<usize> {
        self.encabezados.iter().position(|h| h.trim() == nombre)
    }
}
