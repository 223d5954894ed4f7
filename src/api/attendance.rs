use crate::config::Config;
use crate::error::ApiError;
use crate::generator::punches::{AttendanceSynthesizer, DateRange};
use crate::generator::random::RngSource;
use crate::model::roster::Roster;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

pub const SEARCH_RECORD_SHEET_PATH: &str = "/ISAPI/AccessControl/LocalAttendance/SearchRecordSheet";

const DEFAULT_START_DATE: &str = "2025-08-01";
const DEFAULT_END_DATE: &str = "2025-08-31";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRecordSheet {
    #[serde(default)]
    pub duration: Option<Duration>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    #[schema(example = "2025-08-01", format = "date", value_type = String)]
    pub start_date: Option<String>,
    #[schema(example = "2025-08-31", format = "date", value_type = String)]
    pub end_date: Option<String>,
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| ApiError::MalformedRequest(format!("invalid {field} '{value}': {e}")))
}

impl SearchRecordSheet {
    /// Query range, falling back to the device's default month.
    pub fn date_range(&self) -> Result<DateRange, ApiError> {
        let duration = self.duration.as_ref();
        let start = duration
            .and_then(|d| d.start_date.as_deref())
            .unwrap_or(DEFAULT_START_DATE);
        let end = duration
            .and_then(|d| d.end_date.as_deref())
            .unwrap_or(DEFAULT_END_DATE);

        Ok(DateRange::new(
            parse_date("startDate", start)?,
            parse_date("endDate", end)?,
        ))
    }
}

/// Simulated attendance record sheet
#[utoipa::path(
    post,
    path = "/ISAPI/AccessControl/LocalAttendance/SearchRecordSheet",
    request_body = SearchRecordSheet,
    responses(
        (status = 200, description = "Punches per employee per day", body = crate::model::attendance::AttendanceReport),
        (status = 400, description = "Malformed body or date", body = Object, example = json!({
            "responseStatus": "ERROR",
            "errorMsg": "invalid startDate '2025-13-01': input is out of range"
        })),
        (status = 401, description = "Digest challenge or failed authentication", body = Object, example = json!({
            "error": "Authentication failed"
        }))
    ),
    security(
        ("digest_auth" = [])
    ),
    tag = "Attendance"
)]
pub async fn search_record_sheet(
    body: web::Bytes,
    roster: web::Data<Roster>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let request: SearchRecordSheet = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Unreadable record sheet request");
        ApiError::MalformedRequest(e.to_string())
    })?;
    let range = request.date_range().inspect_err(|e| {
        warn!(error = %e, "Invalid record sheet date range");
    })?;

    debug!(
        start = %range.start,
        end = %range.end,
        employees = roster.len(),
        "Generating attendance report"
    );

    let synthesizer = AttendanceSynthesizer::new(roster.get_ref(), config.lunch_probability);
    let report = synthesizer.report(range, &mut RngSource(rand::thread_rng()));

    Ok(HttpResponse::Ok().json(report))
}
