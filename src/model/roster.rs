use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use chrono::Weekday;

use crate::error::RosterError;
use crate::model::employee::{DayWindow, Employee, WeekSchedule};

/// The fixed set of employees the terminal reports on, in report order.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Result<Self, RosterError> {
        if employees.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen = HashSet::new();
        for e in &employees {
            e.validate()?;
            if !seen.insert(e.id.as_str()) {
                return Err(RosterError::DuplicateId(e.id.clone()));
            }
        }

        Ok(Self { employees })
    }

    /// Reads a JSON array of employees.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading roster file {}", path.display()))?;
        let employees: Vec<Employee> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing roster file {}", path.display()))?;

        Ok(Self::new(employees)?)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Factory roster shipped with the terminal image.
    pub fn builtin() -> Self {
        let w = |a, b, c, d| DayWindow::new(a, b, c, d).expect("builtin window is valid");

        let office = WeekSchedule::weekdays(w(8, 9, 17, 18));
        let employee = |id: &str, name: &str, schedule: WeekSchedule, p: f64| Employee {
            id: id.to_string(),
            name: name.to_string(),
            group_name: "Company".to_string(),
            group_id: 1,
            schedule,
            attendance_probability: p,
        };

        Self {
            employees: vec![
                employee(
                    "1",
                    "Wilson",
                    office.clone().with_day(Weekday::Sat, w(9, 11, 13, 15)),
                    0.8,
                ),
                employee("2", "magk", WeekSchedule::weekdays(w(7, 8, 16, 17)), 0.9),
                employee(
                    "3",
                    "Carlos",
                    office.clone().with_day(Weekday::Sat, w(10, 12, 14, 16)),
                    0.85,
                ),
                employee(
                    "7",
                    "GIOVANNI ROSMERY VILCA FLOREZ",
                    office.clone().with_day(Weekday::Sat, w(10, 12, 14, 16)),
                    0.85,
                ),
                employee(
                    "9",
                    "CHRIST KATHERYNE CHAVEZ CHIPANA",
                    office.with_day(Weekday::Sat, w(10, 12, 14, 16)),
                    0.85,
                ),
                employee(
                    "13",
                    "CHRIST KATHERYNE CHAVEZ CHIPANA",
                    WeekSchedule::weekdays(w(8, 9, 17, 20)).with_day(Weekday::Sat, w(8, 9, 17, 20)),
                    0.99,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_is_valid_and_ordered() {
        let roster = Roster::builtin();
        let ids: Vec<_> = roster.employees().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "7", "9", "13"]);
        assert!(Roster::new(roster.employees().to_vec()).is_ok());
    }

    #[test]
    fn nobody_works_sundays_in_builtin_roster() {
        for e in Roster::builtin().employees() {
            assert!(e.schedule.window(Weekday::Sun).is_none(), "{}", e.id);
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut employees = Roster::builtin().employees().to_vec();
        employees[1].id = "1".into();
        assert!(matches!(
            Roster::new(employees),
            Err(RosterError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(matches!(Roster::new(vec![]), Err(RosterError::Empty)));
    }

    #[test]
    fn roster_file_is_loaded_from_disk() {
        let path = std::env::temp_dir().join(format!("roster-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"id":"42","name":"Ana","group_name":"Night","group_id":3,
                 "schedule":{"sunday":[20,21,23,23]},"attendance_probability":0.5}]"#,
        )
        .unwrap();

        let roster = Roster::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(roster.len(), 1);
        let e = &roster.employees()[0];
        assert_eq!(e.group_id, 3);
        assert_eq!(e.schedule.work_days().collect::<Vec<_>>(), [Weekday::Sun]);
    }
}
