use crate::api::attendance::{Duration, SearchRecordSheet};
use crate::api::system::{AuthSummary, ConfigResponse, EmployeeSummary, HealthResponse};
use crate::model::attendance::{AttendanceRecord, AttendanceReport, EmployeeAttendance};
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biometric Terminal Simulator API",
        version = "1.0.0",
        description = r#"
## Biometric Attendance Terminal Simulator

Emulates the network API of a biometric access-control terminal so that
attendance clients can be built and tested without hardware.

### 🔹 Endpoints
- **Record sheet search**
  - Simulated punches per employee per day for a date range
- **System**
  - Health check and configured roster summary

### 🔐 Security
The record sheet endpoint uses **HTTP Digest (MD5, qop=auth)**. A request
without credentials receives a `401` challenge carrying a fresh nonce.

### 📦 Response Format
- Device-compatible JSON field names (`matchResults`, `detailInfo`, `timeList`)
- Punch times are minutes since midnight

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::search_record_sheet,

        crate::api::system::health_check,
        crate::api::system::get_config
    ),
    components(
        schemas(
            SearchRecordSheet,
            Duration,
            AttendanceReport,
            EmployeeAttendance,
            AttendanceRecord,
            HealthResponse,
            ConfigResponse,
            EmployeeSummary,
            AuthSummary
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Attendance", description = "Attendance record sheet APIs"),
        (name = "System", description = "Simulator status APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "digest_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Digest).build()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/ISAPI/AccessControl/LocalAttendance/SearchRecordSheet".to_string()));
        assert!(paths.contains(&"/health".to_string()));
        assert!(paths.contains(&"/config".to_string()));
        assert!(doc.components.unwrap().security_schemes.contains_key("digest_auth"));
    }
}
