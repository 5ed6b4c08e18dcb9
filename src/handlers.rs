use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::NaiveDate;
use repositories::{DatabaseRepo, NewReservation, RepoError};
use serde::Serialize;
use serde_json::json;
use services::{Form, FormData, FormErrors};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize)]
struct FormRejection<'a> {
    errors: FormErrors,
    values: &'a FormData,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(post_reservation)
        .service(users_exist);
}

#[get("/")]
async fn index() -> &'static str {
    "Hello, bed & breakfast!"
}

#[get("/users/exists")]
async fn users_exist(repo: web::Data<dyn DatabaseRepo>) -> impl Responder {
    HttpResponse::Ok().json(json!({ "any": repo.all_users().await }))
}

#[post("/make-reservation")]
async fn post_reservation(
    repo: web::Data<dyn DatabaseRepo>,
    body: web::Form<Vec<(String, String)>>,
) -> HttpResponse {
    let data: FormData = body.into_inner().into_iter().collect();
    let mut form = Form::new(&data);

    form.required(&["first_name", "last_name", "email", "start_date", "end_date", "room_id"]);
    form.min_length("first_name", 3);
    form.is_email("email");

    let start_date = parse_date(&mut form, "start_date");
    let end_date = parse_date(&mut form, "end_date");
    let room_id = parse_room_id(&mut form, "room_id");

    let (Some(start_date), Some(end_date), Some(room_id), true) =
        (start_date, end_date, room_id, form.valid())
    else {
        tracing::debug!(errors = %form.errors(), "reservation form rejected");
        return HttpResponse::UnprocessableEntity().json(FormRejection {
            errors: form.into_errors(),
            values: &data,
        });
    };

    let reservation = NewReservation {
        first_name: data.get("first_name").trim().to_string(),
        last_name: data.get("last_name").trim().to_string(),
        email: data.get("email").to_string(),
        phone: data.get("phone").trim().to_string(),
        start_date,
        end_date,
        room_id,
    };

    match repo.insert_reservation(reservation).await {
        Ok(id) => HttpResponse::Created().json(json!({ "id": id })),
        Err(RepoError::InvalidReservation(message)) => {
            HttpResponse::UnprocessableEntity().json(json!({ "error": message }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to store reservation");
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}

/// Blank values are left to `required`; only malformed ones are reported here.
fn parse_date(form: &mut Form<'_>, field: &str) -> Option<NaiveDate> {
    let value = form.get(field).trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            form.add_error(field, "Invalid date, use YYYY-MM-DD");
            None
        }
    }
}

fn parse_room_id(form: &mut Form<'_>, field: &str) -> Option<i32> {
    let value = form.get(field).trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            form.add_error(field, "Invalid room");
            None
        }
    }
}
