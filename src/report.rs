use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use thiserror::Error;

use crate::collision::Collision;

/// Vehicle types rarer than this across the whole dataset are noise and
/// never appear in a vehicle-type report.
const MIN_VEHICLE_TYPE_COUNT: usize = 100;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    DayOfWeek,
    Month,
    Time,
    Borough,
    ZipCode,
    VehicleType,
}

impl Dimension {
    pub fn from_token(token: &str) -> Option<Dimension> {
        match token {
            "1" => Some(Dimension::DayOfWeek),
            "2" => Some(Dimension::Month),
            "3" => Some(Dimension::Time),
            "4" => Some(Dimension::Borough),
            "5" => Some(Dimension::ZipCode),
            "6" => Some(Dimension::VehicleType),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::DayOfWeek => "day of week",
            Dimension::Month => "month",
            Dimension::Time => "time",
            Dimension::Borough => "borough",
            Dimension::ZipCode => "zip code",
            Dimension::VehicleType => "vehicle type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MostSafe,
    MostDangerous,
}

impl Direction {
    pub fn from_token(token: &str) -> Option<Direction> {
        match token {
            "1" => Some(Direction::MostSafe),
            "2" => Some(Direction::MostDangerous),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::MostSafe => "most safe",
            Direction::MostDangerous => "most dangerous",
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no {0} values present in the dataset")]
    NoData(&'static str),
}

/// Groups the dataset by the chosen dimension, counts collisions per group,
/// and formats the group with the extreme count.
pub fn aggregate(
    records: &[Collision],
    dimension: Dimension,
    direction: Direction,
) -> Result<String, ReportError> {
    let result = match dimension {
        Dimension::DayOfWeek => {
            let keys = records
                .iter()
                .map(|r| r.crash_date.weekday().num_days_from_monday());
            extreme_key(keys, direction).map(|day| WEEKDAY_NAMES[day as usize].to_string())
        }
        Dimension::Month => {
            let keys = records.iter().map(|r| r.crash_date.month());
            extreme_key(keys, direction).map(|month| MONTH_NAMES[month as usize - 1].to_string())
        }
        Dimension::Time => {
            let keys = records.iter().map(|r| r.crash_time);
            extreme_key(keys, direction).map(format_minutes)
        }
        Dimension::Borough => {
            let keys = records.iter().filter_map(|r| r.borough.as_deref());
            extreme_key(keys, direction).map(str::to_string)
        }
        Dimension::ZipCode => {
            let keys = records
                .iter()
                .map(|r| zip_as_number(r.zip_code.as_deref()))
                .filter(|&zip| zip != 0);
            extreme_key(keys, direction).map(|zip| zip.to_string())
        }
        Dimension::VehicleType => {
            let mut totals: HashMap<&str, usize> = HashMap::new();
            for vehicle in records.iter().filter_map(|r| r.vehicle_type.as_deref()) {
                *totals.entry(vehicle).or_insert(0) += 1;
            }
            let keys = records
                .iter()
                .filter_map(|r| r.vehicle_type.as_deref())
                .filter(|vehicle| totals[vehicle] >= MIN_VEHICLE_TYPE_COUNT);
            extreme_key(keys, direction).map(str::to_string)
        }
    };
    result.ok_or(ReportError::NoData(dimension.label()))
}

/// Counts occurrences per key and returns the key with the smallest
/// (MostSafe) or largest (MostDangerous) count. Ties go to the key that
/// sorts first under the key type's natural ordering.
fn extreme_key<K: Ord>(keys: impl Iterator<Item = K>, direction: Direction) -> Option<K> {
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut best: Option<(K, usize)> = None;
    for (key, count) in counts {
        let better = match &best {
            None => true,
            Some((_, best_count)) => match direction {
                Direction::MostSafe => count < *best_count,
                Direction::MostDangerous => count > *best_count,
            },
        };
        if better {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

// Mirrors numeric coercion of the raw zip text: floats truncate, anything
// unparseable becomes 0 and is dropped from the report.
fn zip_as_number(zip: Option<&str>) -> u32 {
    zip.and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value as u32)
        .unwrap_or(0)
}

fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
