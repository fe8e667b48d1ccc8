use actix_cors::Cors;

/// Any origin, method and header.
pub fn create_cors() -> Cors {
    Cors::permissive()
}
