use chrono::{Datelike, NaiveDate};

use crate::generator::random::RandomSource;
use crate::model::attendance::{AttendanceRecord, AttendanceReport, EmployeeAttendance};
use crate::model::employee::{DayWindow, Employee};
use crate::model::roster::Roster;

const LUNCH_OUT: u16 = 12 * 60;
const LUNCH_IN: u16 = 13 * 60;
const LUNCH_SLACK_MINUTES: u32 = 30;

/// Inclusive calendar range of a report query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A "today so far" query: the closing punch has not happened yet.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Every date from start to end; empty when start is after end.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Builds simulated attendance reports for a roster.
pub struct AttendanceSynthesizer<'a> {
    roster: &'a Roster,
    lunch_probability: f64,
}

impl<'a> AttendanceSynthesizer<'a> {
    pub fn new(roster: &'a Roster, lunch_probability: f64) -> Self {
        Self {
            roster,
            lunch_probability,
        }
    }

    pub fn report<R: RandomSource>(&self, range: DateRange, rng: &mut R) -> AttendanceReport {
        let match_results: Vec<_> = self
            .roster
            .employees()
            .iter()
            .map(|e| self.employee(e, range, rng))
            .collect();

        AttendanceReport {
            response_status: "OK".to_string(),
            num_of_matches: self.roster.len(),
            total_matches: self.roster.len(),
            match_results,
        }
    }

    fn employee<R: RandomSource>(
        &self,
        employee: &Employee,
        range: DateRange,
        rng: &mut R,
    ) -> EmployeeAttendance {
        EmployeeAttendance {
            employee_no: employee.id.clone(),
            name: employee.name.clone(),
            group_name: employee.group_name.clone(),
            group_id: employee.group_id,
            detail_info: range
                .days()
                .map(|date| self.day(employee, date, range.is_single_day(), rng))
                .collect(),
        }
    }

    /// Record for one employee on one date.
    ///
    /// The attendance draw is only taken on scheduled days, so unscheduled
    /// days consume no randomness.
    pub fn day<R: RandomSource>(
        &self,
        employee: &Employee,
        date: NaiveDate,
        single_day: bool,
        rng: &mut R,
    ) -> AttendanceRecord {
        let weekday = date.weekday();
        let time_list = match employee.schedule.window(weekday) {
            Some(window) if rng.chance() < employee.attendance_probability => {
                punches(window, self.lunch_probability, single_day, rng)
            }
            _ => Vec::new(),
        };

        AttendanceRecord {
            date_time: date,
            day_of_week: weekday.number_from_monday(),
            time_list,
        }
    }
}

/// Clock-in, optional lunch pair and clock-out, sorted ascending.
///
/// For single-day queries the latest punch is dropped, whichever it is.
pub fn punches<R: RandomSource>(
    window: &DayWindow,
    lunch_probability: f64,
    single_day: bool,
    rng: &mut R,
) -> Vec<u16> {
    let (in_lo, in_hi) = window.clock_in_hours();
    let (out_lo, out_hi) = window.clock_out_hours();

    let mut times = vec![
        minute_in_hours(in_lo, in_hi, rng),
        minute_in_hours(out_lo, out_hi, rng),
    ];

    if rng.chance() < lunch_probability {
        times.push(LUNCH_OUT + rng.pick(0, LUNCH_SLACK_MINUTES) as u16);
        times.push(LUNCH_IN + rng.pick(0, LUNCH_SLACK_MINUTES) as u16);
    }

    times.sort_unstable();
    if single_day {
        times.pop();
    }
    times
}

fn minute_in_hours<R: RandomSource>(lo: u8, hi: u8, rng: &mut R) -> u16 {
    let hour = rng.pick(lo.into(), hi.into()) as u16;
    let minute = rng.pick(0, 59) as u16;
    hour * 60 + minute
}
