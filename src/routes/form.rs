use actix_web::{http::header::ContentType, HttpResponse, Responder};

use crate::models::preference::Preference;
use crate::services::map_service::escape_html;

const PAGE: &str = include_str!("../../static/index.html");

/*
    /
*/
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page())
}

pub fn render_page() -> String {
    let checkboxes = Preference::FORM_ORDER
        .iter()
        .map(|preference| {
            let label = escape_html(preference.label());
            format!(
                r#"<label><input type="checkbox" name="preferences" value="{}"/> {}</label>"#,
                label, label
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    PAGE.replace("<!-- PREFERENCES -->", &checkboxes)
}
