use std::collections::BTreeMap;

use crate::config::Config;
use crate::model::employee::weekday_name;
use crate::model::roster::Roster;
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "Biometric terminal simulator running")]
    pub message: String,
    #[schema(example = 6)]
    pub employees: usize,
    #[schema(example = 8035)]
    pub port: Option<u16>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeSummary {
    pub name: String,
    #[schema(example = 0.9)]
    pub attendance_probability: f64,
    #[schema(example = json!(["monday", "tuesday"]))]
    pub work_days: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthSummary {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "DS-K1T341AMF")]
    pub realm: String,
}

#[derive(Serialize, ToSchema)]
pub struct ConfigResponse {
    pub employees: BTreeMap<String, EmployeeSummary>,
    pub auth: AuthSummary,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Simulator is up", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check(roster: web::Data<Roster>, config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Biometric terminal simulator running".to_string(),
        employees: roster.len(),
        port: config.port(),
    })
}

/// Roster and auth identity, without the password
#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "Current simulator configuration", body = ConfigResponse)
    ),
    tag = "System"
)]
pub async fn get_config(roster: web::Data<Roster>, config: web::Data<Config>) -> impl Responder {
    let employees = roster
        .employees()
        .iter()
        .map(|e| {
            let summary = EmployeeSummary {
                name: e.name.clone(),
                attendance_probability: e.attendance_probability,
                work_days: e
                    .schedule
                    .work_days()
                    .map(|d| weekday_name(d).to_string())
                    .collect(),
            };
            (e.id.clone(), summary)
        })
        .collect();

    HttpResponse::Ok().json(ConfigResponse {
        employees,
        auth: AuthSummary {
            username: config.credentials.username.clone(),
            realm: config.credentials.realm.clone(),
        },
    })
}
