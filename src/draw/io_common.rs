use std::path::Path;

/// The formats a participant list can be read from.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Spreadsheet,
    Csv,
}

impl InputType {
    pub fn from_name(name: &str) -> Option<InputType> {
        match name.to_lowercase().as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" | "excel" => Some(InputType::Spreadsheet),
            "csv" => Some(InputType::Csv),
            _ => None,
        }
    }

    /// Guesses the type from the extension of the file.
    pub fn from_path(path: &str) -> Option<InputType> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(InputType::from_name)
    }
}

/// Renders a spreadsheet cell as text. None for empty and error cells.
pub fn cell_text(cell: &calamine::DataType) -> Option<String> {
    match cell {
        calamine::DataType::String(s) => Some(s.clone()),
        // Handles written as numbers (phone numbers, ticket numbers) come back as floats.
        calamine::DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => {
            Some(format!("{}", *f as i64))
        }
        calamine::DataType::Float(f) => Some(f.to_string()),
        calamine::DataType::Int(i) => Some(i.to_string()),
        calamine::DataType::Bool(b) => Some(b.to_string()),
        calamine::DataType::DateTime(f) => Some(excel_date_text(*f)),
        _ => None,
    }
}

// Serial of 1970-01-01 in the 1900 date system.
const UNIX_EPOCH_SERIAL: i64 = 25569;

/// Renders a date cell (days since 1899-12-30, time as the fraction) as
/// `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` when it carries a time.
fn excel_date_text(serial: f64) -> String {
    if !serial.is_finite() || !(0.0..=2_958_465.0).contains(&serial) {
        return serial.to_string();
    }
    let mut days = serial.trunc() as i64;
    let mut secs = (serial.fract() * 86_400.0).round() as i64;
    if secs == 86_400 {
        days += 1;
        secs = 0;
    }
    let (y, m, d) = civil_from_days(days - UNIX_EPOCH_SERIAL);
    if secs == 0 {
        format!("{:04}-{:02}-{:02}", y, m, d)
    } else {
        format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            y,
            m,
            d,
            secs / 3600,
            secs / 60 % 60,
            secs % 60
        )
    }
}

// Proleptic Gregorian date of a day count relative to 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}
