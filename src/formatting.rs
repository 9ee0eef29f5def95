use std::fmt;

use crate::f1::LapStatus;
use crate::panels::standings::StandingsRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    UnknownEnumValue { kind: &'static str, value: i64 },
    UnknownGear(i8),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownEnumValue { kind, value } => {
                write!(f, "unknown {} {}", kind, value)
            }
            FormatError::UnknownGear(gear) => write!(f, "unknown gear {}", gear),
        }
    }
}

impl std::error::Error for FormatError {}

const SESSION_TYPES: [&str; 13] = [
    "Unknown",
    "Free Practice 1",
    "Free Practice 2",
    "Free Practice 3",
    "Free Practice (Short)",
    "Qualification 1",
    "Qualification 2",
    "Qualification 3",
    "Qualification (Short)",
    "One-Shot Qualifying",
    "Race",
    "Race 2",
    "Time Trial",
];

const TRACKS: [&str; 25] = [
    "Melbourne",
    "Paul Ricard",
    "Shanghai",
    "Sakhir (Bahrain)",
    "Catalunya",
    "Monaco",
    "Montreal",
    "Silverstone",
    "Hockenheim",
    "Hungaroring",
    "Spa",
    "Monza",
    "Singapore",
    "Suzuka",
    "Abu Dhabi",
    "Texas",
    "Brazil",
    "Austria",
    "Sochi",
    "Mexico",
    "Baku (Azerbaijan)",
    "Sakhir Short",
    "Silverstone Short",
    "Texas Short",
    "Suzuka Short",
];

const GEARS: [&str; 10] = ["R", "N", "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th"];

/// `HH:MM:SS`, or `HH:MM:SS.mmm` with the milliseconds rounded.
pub fn format_duration(seconds: f32, with_millis: bool) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let mut whole = seconds.trunc() as u64;

    let mut millis = 0;
    if with_millis {
        millis = ((seconds - seconds.trunc()) * 1000.0).round() as u64;
        if millis >= 1000 {
            whole += 1;
            millis -= 1000;
        }
    }

    let (m, s) = (whole / 60, whole % 60);
    let (h, m) = (m / 60, m % 60);

    if with_millis {
        format!("{:02}:{:02}:{:02}.{:03}", h, m, s, millis)
    } else {
        format!("{:02}:{:02}:{:02}", h, m, s)
    }
}

pub fn format_gear(gear: i8) -> Result<&'static str, FormatError> {
    usize::try_from(gear as i16 + 1)
        .ok()
        .and_then(|idx| GEARS.get(idx))
        .copied()
        .ok_or(FormatError::UnknownGear(gear))
}

pub fn format_session_type(id: u8) -> Result<&'static str, FormatError> {
    SESSION_TYPES.get(id as usize).copied().ok_or(FormatError::UnknownEnumValue {
        kind: "session type",
        value: id as i64,
    })
}

pub fn format_track_id(id: i8) -> Result<&'static str, FormatError> {
    usize::try_from(id)
        .ok()
        .and_then(|idx| TRACKS.get(idx))
        .copied()
        .ok_or(FormatError::UnknownEnumValue { kind: "track id", value: id as i64 })
}

pub fn format_position(row: &StandingsRow) -> String {
    match row.lap_status {
        Some(LapStatus::Retired) => "RET".to_string(),
        Some(LapStatus::NotClassified) => "N/C".to_string(),
        Some(LapStatus::Disqualified) => "DSQ".to_string(),
        _ => format!("{}.", row.position),
    }
}

pub fn format_status(row: &StandingsRow) -> String {
    let pit = if row.in_pit { "P" } else { " " };
    format!("{}+{}", pit, row.penalties)
}

/// Shortens the configured driver's name to `L. HAMILTON`; everybody else
/// is shown as sent by the game.
pub fn format_driver_label(name: &str, local_driver: &str) -> String {
    if local_driver.is_empty() || name != local_driver {
        return name.to_string();
    }

    match name.split_once(' ') {
        Some((first, last)) => match first.chars().next() {
            Some(initial) => format!("{}. {}", initial, last.trim().to_uppercase()),
            None => last.trim().to_uppercase(),
        },
        None => name.to_uppercase(),
    }
}

/// One `|` per `step` percent, rounded like the rest of the dashboard.
pub fn bar(pct: f32, step: u32) -> String {
    let pct = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 };
    let count = pct.round() as u32 / step.max(1);
    "|".repeat(count as usize)
}
