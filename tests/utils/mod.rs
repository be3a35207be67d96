use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use metar_decoder::units::{
    Angle, AngleUnit, Height, HeightUnit, Speed, SpeedUnit, Visibility, VisibilityUnit,
};
use metar_decoder::{decode_at, DecodeError, Report};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    // Set RUST_LOG=metar_decoder=trace to watch the decoder walk the grammar.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[allow(unused_macros)] // False alarm
macro_rules! test_report {
    ($test_name:ident) => {
        #[test]
        fn $test_name() {
            let sample = utils::load_sample(stringify!($test_name));
            utils::check_outcome(&sample);
        }
    };
    ($test_name:ident, |$rpt:ident| $body:block) => {
        #[test]
        fn $test_name() {
            let sample = utils::load_sample(stringify!($test_name));
            let $rpt = utils::check_outcome(&sample).expect("expected the sample to decode");
            $body
        }
    };
}

/// A sample report from `test_data/reports.txt`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: String,
    pub expected: String,
    pub raw: String,
}

/// The fixed instant all the samples are decoded against.
#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 28, 0, 0, 0).unwrap()
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn decode(raw: &str) -> Result<Report, DecodeError> {
    decode_at(raw, reference_time())
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn degrees(val: f64) -> Angle {
    Angle::new(val, AngleUnit::Degrees)
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn knots(val: f64) -> Speed {
    Speed::new(val, SpeedUnit::Knots)
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn feet(val: f64) -> Height {
    Height::new(val, HeightUnit::Feet)
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn miles(val: f64) -> Visibility {
    Visibility::new(val, VisibilityUnit::StatuteMiles)
}

/// The name of an error variant without its payload, e.g. `InvalidWind`.
#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn variant_name(err: &DecodeError) -> String {
    let dbg = format!("{:?}", err);
    dbg.split('(').next().unwrap_or_default().to_owned()
}

/// Decode a sample and check that it succeeded or failed as the data file says it should.
#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn check_outcome(sample: &Sample) -> Option<Report> {
    let result = decode(&sample.raw);
    println!("{} = {:#?}", sample.name, result);

    match (sample.expected.as_str(), result) {
        ("ok", Ok(rpt)) => Some(rpt),
        ("ok", Err(err)) => panic!("{} failed to decode: {}", sample.name, err),
        (expected, Ok(_)) => panic!("{} decoded but expected {}", sample.name, expected),
        (expected, Err(err)) => {
            assert_eq!(variant_name(&err), expected, "{}: {}", sample.name, err);
            None
        }
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn load_sample(name: &str) -> Sample {
    load_samples()
        .remove(name)
        .unwrap_or_else(|| panic!("No sample named {}", name))
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn load_samples() -> HashMap<String, Sample> {
    let mut path = PathBuf::new();
    path.push(env!("CARGO_MANIFEST_DIR"));
    path.push("test_data");
    path.push("reports.txt");

    let mut f = File::open(&path).unwrap_or_else(|_| panic!("Error opening file: {:#?}", path));
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading file: {:#?}", path));

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut cols = line.splitn(3, '|').map(str::trim);
            let name = cols.next().unwrap().to_owned();
            let expected = cols.next().expect("missing outcome column").to_owned();
            let raw = cols.next().expect("missing report column").to_owned();

            (
                name.clone(),
                Sample {
                    name,
                    expected,
                    raw,
                },
            )
        })
        .collect()
}
