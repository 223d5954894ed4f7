use chrono::Weekday;
use serde::Deserialize;

use crate::error::RosterError;

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Hours of the day during which an employee may punch in and out.
///
/// Punches fall anywhere in `[in_earliest:00, in_latest:59]` and
/// `[out_earliest:00, out_latest:59]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "[u8; 4]")]
pub struct DayWindow {
    in_earliest: u8,
    in_latest: u8,
    out_earliest: u8,
    out_latest: u8,
}

impl DayWindow {
    pub fn new(
        in_earliest: u8,
        in_latest: u8,
        out_earliest: u8,
        out_latest: u8,
    ) -> Result<Self, RosterError> {
        let hours = [in_earliest, in_latest, out_earliest, out_latest];
        if let Some(&hour) = hours.iter().find(|h| **h > 23) {
            return Err(RosterError::HourOutOfRange(hour));
        }
        if in_earliest > in_latest || out_earliest > out_latest {
            return Err(RosterError::InvertedWindow(hours));
        }

        Ok(Self {
            in_earliest,
            in_latest,
            out_earliest,
            out_latest,
        })
    }

    pub fn clock_in_hours(&self) -> (u8, u8) {
        (self.in_earliest, self.in_latest)
    }

    pub fn clock_out_hours(&self) -> (u8, u8) {
        (self.out_earliest, self.out_latest)
    }
}

impl TryFrom<[u8; 4]> for DayWindow {
    type Error = RosterError;

    fn try_from([a, b, c, d]: [u8; 4]) -> Result<Self, Self::Error> {
        DayWindow::new(a, b, c, d)
    }
}

/// One optional window per weekday, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ScheduleByDay")]
pub struct WeekSchedule([Option<DayWindow>; 7]);

impl WeekSchedule {
    pub fn with_day(mut self, day: Weekday, window: DayWindow) -> Self {
        self.0[day.num_days_from_monday() as usize] = Some(window);
        self
    }

    /// Same window Monday through Friday, nothing on the weekend.
    pub fn weekdays(window: DayWindow) -> Self {
        WEEK[..5]
            .iter()
            .fold(Self::default(), |s, day| s.with_day(*day, window))
    }

    pub fn window(&self, day: Weekday) -> Option<&DayWindow> {
        self.0[day.num_days_from_monday() as usize].as_ref()
    }

    /// Weekdays that have a window, in calendar order.
    pub fn work_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.into_iter().filter(move |d| self.window(*d).is_some())
    }
}

/// Wire form of a schedule: lowercase weekday keys, absent or null means off.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ScheduleByDay {
    monday: Option<DayWindow>,
    tuesday: Option<DayWindow>,
    wednesday: Option<DayWindow>,
    thursday: Option<DayWindow>,
    friday: Option<DayWindow>,
    saturday: Option<DayWindow>,
    sunday: Option<DayWindow>,
}

impl From<ScheduleByDay> for WeekSchedule {
    fn from(s: ScheduleByDay) -> Self {
        WeekSchedule([
            s.monday,
            s.tuesday,
            s.wednesday,
            s.thursday,
            s.friday,
            s.saturday,
            s.sunday,
        ])
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub group_name: String,
    pub group_id: u32,
    pub schedule: WeekSchedule,
    pub attendance_probability: f64,
}

impl Employee {
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.id.trim().is_empty() {
            return Err(RosterError::EmptyId);
        }
        if !(0.0..=1.0).contains(&self.attendance_probability) {
            return Err(RosterError::Probability {
                id: self.id.clone(),
                value: self.attendance_probability,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_rejects_hours_past_23() {
        assert!(matches!(
            DayWindow::new(8, 24, 17, 18),
            Err(RosterError::HourOutOfRange(24))
        ));
    }

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(DayWindow::new(9, 8, 17, 18).is_err());
        assert!(DayWindow::new(8, 9, 18, 17).is_err());
        assert!(DayWindow::new(8, 8, 17, 17).is_ok());
    }

    #[test]
    fn schedule_lookup_is_by_weekday() {
        let w = DayWindow::new(7, 8, 16, 17).unwrap();
        let schedule = WeekSchedule::weekdays(w);

        assert_eq!(schedule.window(Weekday::Mon), Some(&w));
        assert_eq!(schedule.window(Weekday::Fri), Some(&w));
        assert_eq!(schedule.window(Weekday::Sat), None);
        assert_eq!(schedule.window(Weekday::Sun), None);
        assert_eq!(schedule.work_days().count(), 5);
    }

    #[test]
    fn schedule_parses_from_named_days() {
        let schedule: WeekSchedule = serde_json::from_value(serde_json::json!({
            "monday": [8, 9, 17, 18],
            "saturday": [9, 11, 13, 15],
            "sunday": null
        }))
        .unwrap();

        assert_eq!(
            schedule.window(Weekday::Sat),
            Some(&DayWindow::new(9, 11, 13, 15).unwrap())
        );
        assert_eq!(schedule.window(Weekday::Tue), None);
        assert_eq!(schedule.window(Weekday::Sun), None);
    }

    #[test]
    fn schedule_rejects_bad_window_in_json() {
        let parsed: Result<WeekSchedule, _> =
            serde_json::from_value(serde_json::json!({ "monday": [10, 9, 17, 18] }));
        assert!(parsed.is_err());
    }

    #[test]
    fn probability_must_be_a_fraction() {
        let mut e = Employee {
            id: "1".into(),
            name: "Wilson".into(),
            group_name: "Company".into(),
            group_id: 1,
            schedule: WeekSchedule::default(),
            attendance_probability: 1.5,
        };
        assert!(e.validate().is_err());
        e.attendance_probability = 0.0;
        assert!(e.validate().is_ok());
    }
}
