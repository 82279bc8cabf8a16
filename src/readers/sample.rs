use crate::models::{Dataset, Record};

pub const SAMPLE_FIELDS: [&str; 4] = ["direccion", "velocidad", "fecha", "hora"];

/// (direction °, speed km/h, hour) for one day of hourly readings.
const SAMPLE_ROWS: [(f64, f64, &str); 16] = [
    (0.0, 5.0, "00:00"),
    (45.0, 8.0, "01:00"),
    (90.0, 12.0, "02:00"),
    (135.0, 7.0, "03:00"),
    (180.0, 3.0, "04:00"),
    (225.0, 6.0, "05:00"),
    (270.0, 15.0, "06:00"),
    (315.0, 9.0, "07:00"),
    (0.0, 11.0, "08:00"),
    (45.0, 14.0, "09:00"),
    (90.0, 18.0, "10:00"),
    (135.0, 22.0, "11:00"),
    (180.0, 16.0, "12:00"),
    (225.0, 10.0, "13:00"),
    (270.0, 7.0, "14:00"),
    (315.0, 4.0, "15:00"),
];

/// Built-in dataset for trying the analysis without an input file.
pub fn sample_dataset() -> Dataset {
    let records = SAMPLE_ROWS
        .iter()
        .map(|(direction, speed, hour)| {
            Record::new()
                .with_value(SAMPLE_FIELDS[0], *direction)
                .with_value(SAMPLE_FIELDS[1], *speed)
                .with_value(SAMPLE_FIELDS[2], "2023-01-01")
                .with_value(SAMPLE_FIELDS[3], *hour)
        })
        .collect();

    Dataset::new(SAMPLE_FIELDS.iter().map(|f| f.to_string()).collect(), records)
}
