use actix_web::{HttpResponse, Responder};

use crate::models::preference::{Preference, PreferenceOption};

/*
    /api/preferences
*/
pub async fn get_preferences() -> impl Responder {
    let options: Vec<PreferenceOption> = Preference::FORM_ORDER
        .into_iter()
        .map(Preference::option)
        .collect();
    HttpResponse::Ok().json(options)
}
