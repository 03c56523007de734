use tracing::info;
use ansi_term::Colour;
use parking_lot::RwLock;
use lazy_static::lazy_static;
use actix_web::{HttpResponse, http::header::ContentType};

pub mod prelude {
    use ansi_term::Colour;
    use super::USE_COLOUR;
    use lazy_static::lazy_static;

    const GREY: Colour = Colour::RGB(110, 110, 110);

    // Some logging format symbols, potentially with colour.
    lazy_static! {
        pub static ref COLON: String = match *USE_COLOUR {
            true  => Colour::Yellow.paint(":").to_string(),
            false => String::from(":"),
        };

        pub static ref IN: String = match *USE_COLOUR {
            true  => GREY.paint("> ").to_string(),
            false => String::from("> "),
        };

        pub static ref OUT: String = match *USE_COLOUR {
            true  => GREY.paint("< ").to_string(),
            false => String::from("< "),
        };
    }
}

///
/// Return the status with ansi-colouring.
///
pub fn colour_status(status: u16) -> String {
    if *USE_COLOUR {
        return match status {
            200..=299 => format!("{}", Colour::RGB(107, 142, 35).paint(status.to_string())),
            300..=399 => format!("{}", Colour::RGB(255, 140,  0).paint(status.to_string())),
            _         => format!("{}", Colour::RGB(205,  92, 92).paint(status.to_string())),
        }
    }

    status.to_string()
}

lazy_static! {
    /// The tracer is used to aid us in times of crisis to write request bodies and response
    /// details to the log for all incoming requests.
    static ref TRACER: RwLock<bool> = RwLock::new(false);

    /// For those terms that don't support ansi colour set USE_COLOUR to false.
    pub static ref USE_COLOUR: bool = std::env::var("USE_COLOUR")
        .unwrap_or_default()
        .to_lowercase() == "true";
}

///
/// Is the tracer currently on?
///
pub fn tracer_on() -> bool {
    *TRACER.read()
}

fn set_tracer(on: bool) {
    *TRACER.write() = on;
}

///
/// HTTP Handler to turn tracer on.
///
pub async fn handle_on() -> HttpResponse {
    set_tracer(true);
    info!("Tracer is on");
    HttpResponse::Ok().insert_header(ContentType::plaintext()).body("on")
}

///
/// HTTP Handler to turn tracer .... off.
///
pub async fn handle_off() -> HttpResponse {
    set_tracer(false);
    info!("Tracer is off");
    HttpResponse::Ok().insert_header(ContentType::plaintext()).body("off")
}
