//! Tabla estática de coordenadas de los departamentos judiciales.

/// Valor centinela para sentencias sin departamento conocido
pub const DEPARTAMENTO_NO_ESPECIFICADO: &str = "No Especificado";

/// Centro del mapa (lat, lon)
pub const CENTRO_MAPA: (f64, f64) = (18.7357, -70.1627);

/// (departamento, latitud, longitud)
pub const COORDENADAS_RD: [(&str, f64, f64); 16] = [
    ("Distrito Nacional", 18.4861, -69.9312),
    ("Santiago", 19.4517, -70.6970),
    ("Santo Domingo", 18.5001, -69.8887),
    ("La Vega", 19.2240, -70.5287),
    ("San Pedro De Macorís", 18.4542, -69.3086),
    ("San Cristóbal", 18.4184, -70.1034),
    ("Duarte", 19.2995, -70.1299),
    ("La Romana", 18.4273, -68.9728),
    ("Puerto Plata", 19.7808, -70.6871),
    ("La Altagracia", 18.6148, -68.7077),
    ("Espaillat", 19.5000, -70.4167),
    ("San Juan", 18.8052, -71.2334),
    ("Barahona", 18.2085, -71.0995),
    ("Azua", 18.4533, -70.7347),
    ("Monseñor Nouel", 18.9221, -70.3846),
    ("San Francisco De Macorís", 19.3008, -70.2527),
];

/// Devuelve `(lat, lon)` del departamento, o `None` si no está en la tabla.
pub fn coordenadas_de(departamento: &str) -> Option<(f64, f64)> {
    COORDENADAS_RD
        .iter()
        .find(|(nombre, _, _)| *nombre == departamento)
        .map(|(_, lat, lon)| (*lat, *lon))
}
