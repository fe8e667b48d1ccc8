use actix_web::{web, Scope};

mod handlers;

pub fn category_service() -> Scope {
    web::scope("/categories")
        .service(handlers::create_category)
        .service(handlers::get_all_categories)
        .service(handlers::delete_category)
}
