//! Time-of-day slots and weekly schedules
//!
//! Slots are kept in their canonical zero-padded `HH:MM` form so that the
//! lexical order of the strings is also their chronological order.

use crate::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A time of day at which a workshop can begin a service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Parse a zero-padded 24-hour `HH:MM` string
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::validation(format!("Time slot must be HH:MM, got {:?}", value));

        let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
        if hours.len() != 2 || minutes.len() != 2 {
            return Err(invalid());
        }
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = hours.parse().map_err(|_| invalid())?;
        let minute: u32 = minutes.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hour(&self) -> u32 {
        // Canonical form is guaranteed by `parse`
        self.0[..2].parse().unwrap_or(0)
    }

    pub fn minute(&self) -> u32 {
        self.0[3..].parse().unwrap_or(0)
    }
}

impl FromStr for TimeSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase English name of a weekday, as used for schedule keys
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn weekday_from_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a full weekday name, case-insensitively
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(Error::validation(format!("Unknown weekday: {:?}", name))),
    }
}

/// Weekday name for a calendar date
pub fn weekday_of(date: NaiveDate) -> &'static str {
    weekday_name(date.weekday())
}

/// Open slots per weekday for a single workshop
///
/// Serialized as a map from lowercase weekday name to a list of `HH:MM`
/// strings. Duplicate times within one day are rejected on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct WeeklySchedule {
    days: BTreeMap<u32, BTreeSet<TimeSlot>>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slots for a weekday, replacing any previous entry
    pub fn set_day<I, S>(&mut self, weekday: Weekday, slots: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = BTreeSet::new();
        for slot in slots {
            let slot = TimeSlot::parse(slot.as_ref())?;
            if !parsed.insert(slot.clone()) {
                return Err(Error::validation(format!(
                    "Duplicate time slot {} on {}",
                    slot,
                    weekday_name(weekday)
                )));
            }
        }
        self.days.insert(weekday.num_days_from_monday(), parsed);
        Ok(())
    }

    /// Builder-style variant of [`WeeklySchedule::set_day`]
    pub fn with_day<I, S>(mut self, weekday: Weekday, slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_day(weekday, slots)?;
        Ok(self)
    }

    /// Slots offered on a weekday; empty when the day is closed
    pub fn slots_on(&self, weekday: Weekday) -> impl Iterator<Item = &TimeSlot> {
        self.days
            .get(&weekday.num_days_from_monday())
            .into_iter()
            .flat_map(|slots| slots.iter())
    }

    /// Slots offered on the weekday of `date`
    pub fn slots_for_date(&self, date: NaiveDate) -> impl Iterator<Item = &TimeSlot> {
        self.slots_on(date.weekday())
    }

    pub fn offers(&self, weekday: Weekday, slot: &TimeSlot) -> bool {
        self.days
            .get(&weekday.num_days_from_monday())
            .is_some_and(|slots| slots.contains(slot))
    }

    /// Weekdays with at least one open slot
    pub fn open_days(&self) -> Vec<Weekday> {
        self.days
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .filter_map(|(day, _)| weekday_from_index(*day))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(BTreeSet::is_empty)
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for WeeklySchedule {
    type Error = Error;

    fn try_from(raw: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut schedule = WeeklySchedule::new();
        for (day, slots) in raw {
            let weekday = parse_weekday(&day)?;
            if schedule.days.contains_key(&weekday.num_days_from_monday()) {
                return Err(Error::validation(format!(
                    "Weekday {} listed more than once",
                    weekday_name(weekday)
                )));
            }
            schedule.set_day(weekday, slots)?;
        }
        Ok(schedule)
    }
}

impl From<WeeklySchedule> for BTreeMap<String, Vec<String>> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule
            .days
            .into_iter()
            .filter_map(|(day, slots)| {
                let weekday = weekday_from_index(day)?;
                Some((
                    weekday_name(weekday).to_string(),
                    slots.into_iter().map(String::from).collect(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_parsing() {
        assert!(TimeSlot::parse("09:00").is_ok());
        assert!(TimeSlot::parse("23:59").is_ok());
        assert!(TimeSlot::parse("00:00").is_ok());

        assert!(TimeSlot::parse("9:00").is_err());
        assert!(TimeSlot::parse("24:00").is_err());
        assert!(TimeSlot::parse("12:60").is_err());
        assert!(TimeSlot::parse("1200").is_err());
        assert!(TimeSlot::parse("ab:cd").is_err());
        assert!(TimeSlot::parse("+1:00").is_err());
        assert!(TimeSlot::parse("").is_err());
    }

    #[test]
    fn test_time_slot_ordering_is_chronological() {
        let mut slots: Vec<TimeSlot> = ["13:00", "09:30", "09:00", "10:00"]
            .iter()
            .map(|s| TimeSlot::parse(s).unwrap())
            .collect();
        slots.sort();
        let ordered: Vec<&str> = slots.iter().map(TimeSlot::as_str).collect();
        assert_eq!(ordered, vec!["09:00", "09:30", "10:00", "13:00"]);
    }

    #[test]
    fn test_time_slot_components() {
        let slot = TimeSlot::parse("14:45").unwrap();
        assert_eq!(slot.hour(), 14);
        assert_eq!(slot.minute(), 45);
    }

    #[test]
    fn test_weekday_names_round_trip() {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(parse_weekday(weekday_name(weekday)).unwrap(), weekday);
        }
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
        assert!(parse_weekday("funday").is_err());
    }

    #[test]
    fn test_weekday_of_date() {
        // 2024-01-01 was a Monday
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(weekday_of(date), "monday");
    }

    #[test]
    fn test_schedule_rejects_duplicate_slots() {
        let result = WeeklySchedule::new().with_day(Weekday::Mon, ["09:00", "09:00"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_schedule_empty_day_offers_nothing() {
        let schedule = WeeklySchedule::new()
            .with_day(Weekday::Mon, Vec::<&str>::new())
            .unwrap();
        assert_eq!(schedule.slots_on(Weekday::Mon).count(), 0);
        assert_eq!(schedule.slots_on(Weekday::Tue).count(), 0);
        assert!(schedule.is_empty());
        assert!(schedule.open_days().is_empty());
    }

    #[test]
    fn test_schedule_deserializes_from_day_map() {
        let json = r#"{"monday": ["10:00", "09:00"], "Friday": ["16:00"]}"#;
        let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();

        let monday: Vec<&str> = schedule.slots_on(Weekday::Mon).map(TimeSlot::as_str).collect();
        assert_eq!(monday, vec!["09:00", "10:00"]);
        assert!(schedule.offers(Weekday::Fri, &TimeSlot::parse("16:00").unwrap()));
        assert_eq!(schedule.open_days(), vec![Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn test_schedule_rejects_bad_input() {
        let bad_day = r#"{"someday": ["09:00"]}"#;
        assert!(serde_json::from_str::<WeeklySchedule>(bad_day).is_err());

        let bad_time = r#"{"monday": ["9am"]}"#;
        assert!(serde_json::from_str::<WeeklySchedule>(bad_time).is_err());

        let repeated_day = r#"{"monday": ["09:00"], "Monday": ["10:00"]}"#;
        assert!(serde_json::from_str::<WeeklySchedule>(repeated_day).is_err());
    }

    #[test]
    fn test_schedule_serializes_with_weekday_names() {
        let schedule = WeeklySchedule::new()
            .with_day(Weekday::Tue, ["08:00"])
            .unwrap();
        let value = serde_json::to_value(&schedule).unwrap();
        assert_eq!(value, serde_json::json!({"tuesday": ["08:00"]}));
    }
}
