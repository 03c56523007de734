use actix_web::{HttpResponse, http::header::ContentType};

pub async fn handle() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body("Hello, World!")
}
