use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Punches of one employee on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[schema(example = "2025-08-04", format = "date", value_type = String)]
    pub date_time: NaiveDate,

    /// ISO weekday, 1 = Monday .. 7 = Sunday.
    #[serde(rename = "dayOfweek")]
    #[schema(example = 1)]
    pub day_of_week: u32,

    /// Minutes since midnight, ascending.
    #[schema(example = json!([455, 724, 788, 1031]))]
    pub time_list: Vec<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAttendance {
    #[schema(example = "2")]
    pub employee_no: String,
    #[schema(example = "magk")]
    pub name: String,
    #[schema(example = "Company")]
    pub group_name: String,
    #[serde(rename = "groupID")]
    #[schema(example = 1)]
    pub group_id: u32,
    pub detail_info: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    #[schema(example = "OK")]
    pub response_status: String,
    #[schema(example = 6)]
    pub num_of_matches: usize,
    #[schema(example = 6)]
    pub total_matches: usize,
    pub match_results: Vec<EmployeeAttendance>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_uses_device_field_names() {
        let report = AttendanceReport {
            response_status: "OK".into(),
            num_of_matches: 1,
            total_matches: 1,
            match_results: vec![EmployeeAttendance {
                employee_no: "2".into(),
                name: "magk".into(),
                group_name: "Company".into(),
                group_id: 1,
                detail_info: vec![AttendanceRecord {
                    date_time: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
                    day_of_week: 1,
                    time_list: vec![455, 1031],
                }],
            }],
        };

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "responseStatus": "OK",
                "numOfMatches": 1,
                "totalMatches": 1,
                "matchResults": [{
                    "employeeNo": "2",
                    "name": "magk",
                    "groupName": "Company",
                    "groupID": 1,
                    "detailInfo": [{
                        "dateTime": "2025-08-04",
                        "dayOfweek": 1,
                        "timeList": [455, 1031]
                    }]
                }]
            })
        );
    }
}
