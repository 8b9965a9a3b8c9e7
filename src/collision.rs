use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{0}' not found")]
    FileNotFound(String),
    #[error("no data rows")]
    EmptyData,
    #[error("{0}")]
    Malformed(String),
}

/// One row of collisions.csv as it appears on disk, before the
/// date and time fields are parsed.
#[derive(Debug, Deserialize)]
struct RawCollision {
    #[serde(rename = "CRASH DATE")]
    crash_date: String,
    #[serde(rename = "CRASH TIME")]
    crash_time: String,
    #[serde(rename = "BOROUGH")]
    borough: Option<String>,
    #[serde(rename = "ZIP CODE")]
    zip_code: Option<String>,
    #[serde(rename = "VEHICLE TYPE CODE 1")]
    vehicle_type: Option<String>,
    #[serde(rename = "COLLISION_ID")]
    collision_id: u64,
}

#[derive(Debug, Clone)]
pub struct Collision {
    pub crash_date: NaiveDate,
    /// Minutes since midnight.
    pub crash_time: u32,
    pub borough: Option<String>,
    /// Raw text; coerced to a number per query, not at load time.
    pub zip_code: Option<String>,
    pub vehicle_type: Option<String>,
    pub collision_id: u64,
}

impl TryFrom<RawCollision> for Collision {
    type Error = LoadError;

    fn try_from(raw: RawCollision) -> Result<Collision, LoadError> {
        Ok(Collision {
            crash_date: parse_date(&raw.crash_date)?,
            crash_time: parse_time(&raw.crash_time)?,
            borough: raw.borough,
            zip_code: raw.zip_code,
            vehicle_type: raw.vehicle_type,
            collision_id: raw.collision_id,
        })
    }
}

pub fn load_csv(path: &str) -> Result<Vec<Collision>, LoadError> {
    let mut rdr = match csv::Reader::from_path(path) {
        Ok(rdr) => rdr,
        Err(err) => return Err(open_error(path, err)),
    };
    let mut records: Vec<Collision> = Vec::new();
    for result in rdr.deserialize() {
        let raw: RawCollision = result.map_err(|err| LoadError::Malformed(err.to_string()))?;
        records.push(raw.try_into()?);
    }
    if records.is_empty() {
        return Err(LoadError::EmptyData);
    }
    Ok(records)
}

fn open_error(path: &str, err: csv::Error) -> LoadError {
    match err.kind() {
        csv::ErrorKind::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
            LoadError::FileNotFound(path.to_string())
        }
        _ => LoadError::Malformed(err.to_string()),
    }
}

// NYC OpenData exports dates as MM/DD/YYYY; ISO is accepted as a fallback.
fn parse_date(text: &str) -> Result<NaiveDate, LoadError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
        .map_err(|_| LoadError::Malformed(format!("unrecognized crash date '{text}'")))
}

// Crash times arrive as "HH:MM" with an unpadded hour; a synthetic seconds
// component makes them a full time of day.
fn parse_time(text: &str) -> Result<u32, LoadError> {
    let with_seconds = format!("{}:00", text.trim());
    let time = NaiveTime::parse_from_str(&with_seconds, "%H:%M:%S")
        .map_err(|_| LoadError::Malformed(format!("unrecognized crash time '{text}'")))?;
    Ok(time.num_seconds_from_midnight() / 60)
}
