use chrono::{DateTime, TimeZone, Utc};
use std::{fs::File, io::Read, path::PathBuf};

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 28, 0, 0, 0).unwrap()
}

/// Every sample report in the test data that is expected to decode.
pub fn load_good_reports() -> Vec<String> {
    load_reports()
        .into_iter()
        .filter(|(expected, _)| expected == "ok")
        .map(|(_, raw)| raw)
        .collect()
}

/// Every sample report in the test data that is expected to fail.
pub fn load_bad_reports() -> Vec<String> {
    load_reports()
        .into_iter()
        .filter(|(expected, _)| expected != "ok")
        .map(|(_, raw)| raw)
        .collect()
}

fn load_reports() -> Vec<(String, String)> {
    let mut path = PathBuf::new();
    path.push("test_data");
    path.push("reports.txt");

    let mut f = File::open(&path).expect(&format!("Error opening file: {:#?}", path));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", path));

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut cols = line.splitn(3, '|').map(str::trim).skip(1);
            Some((cols.next()?.to_owned(), cols.next()?.to_owned()))
        })
        .collect()
}
