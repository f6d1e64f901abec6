use chrono::{NaiveDate, Utc};

use crate::models::WorkoutParams;

/// Maximum accepted note length, in characters.
pub const NOTE_MAX_LEN: usize = 300;

/// Workout fields that passed validation and are ready for persistence.
#[derive(Debug, Clone)]
pub struct WorkoutFields {
    pub name: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Check submitted workout fields, collecting every field error rather than
/// stopping at the first one. A failed check never touches stored data.
pub fn validate_workout(params: &WorkoutParams) -> Result<WorkoutFields, Vec<String>> {
    let today = Utc::now().date_naive();
    let mut errors = Vec::new();

    let name = match validate_name(params.name.as_deref()) {
        Ok(name) => Some(name),
        Err(message) => {
            errors.push(message);
            None
        }
    };

    let date = match validate_date(params.date.as_deref(), today) {
        Ok(date) => Some(date),
        Err(message) => {
            errors.push(message);
            None
        }
    };

    let note = match validate_note(params.note.as_deref()) {
        Ok(note) => Some(note),
        Err(message) => {
            errors.push(message);
            None
        }
    };

    match (name, date, note) {
        (Some(name), Some(date), Some(note)) if errors.is_empty() => {
            Ok(WorkoutFields { name, date, note })
        }
        _ => Err(errors),
    }
}

fn validate_name(name: Option<&str>) -> Result<String, String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err("Name can't be blank".to_string()),
    }
}

fn validate_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate, String> {
    let raw = match date {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => return Err("Date can't be blank".to_string()),
    };

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "Date is invalid".to_string())?;

    if parsed > today {
        return Err("Date must be on or before today".to_string());
    }

    Ok(parsed)
}

fn validate_note(note: Option<&str>) -> Result<Option<String>, String> {
    match note {
        Some(note) if note.chars().count() > NOTE_MAX_LEN => Err(format!(
            "Note is too long (maximum is {} characters)",
            NOTE_MAX_LEN
        )),
        Some(note) if !note.is_empty() => Ok(Some(note.to_string())),
        _ => Ok(None),
    }
}
