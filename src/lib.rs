#![warn(missing_docs)]
/*!
Functions and data types for decoding METAR and SPECI aviation routine weather reports.

A report is a single line of space separated groups, for example

```text
METAR KLRU 241517Z AUTO 00000KT 10SM CLR 01/M02 A3031 RMK AO2
```

Decoding either produces a fully populated [`Report`](crate::Report) or fails with a
[`DecodeError`](crate::DecodeError) naming the first group that could not be decoded. There is no
partial result.

```rust
use metar_decoder::{decode_at, DecodeError};
# use metar_decoder::doctest::reference_time;

let rpt = decode_at("KLRU 241517Z 21010G18KT 10SM SCT030 25/10 A2992", reference_time())
    .unwrap();
assert_eq!(rpt.station(), "KLRU");
assert_eq!(rpt.sky_layers().len(), 1);

let err = decode_at("KLRU 241517Z 21010G18KT FOO", reference_time()).unwrap_err();
assert_eq!(err, DecodeError::UnconsumedGroups("FOO".to_owned()));
```

Reports only code the day of the month and the time, so the full observation time is resolved
relative to a reference time. [`decode`](crate::decode) uses the current time,
[`decode_at`](crate::decode_at) and [`Decoder`](crate::Decoder) let you supply one.
*/

//
// API
//
pub use crate::{
    decoder::{decode, decode_at, Decoder},
    error::{DecodeError, Result, UnitError},
    report::{
        ClearSky, CloudType, Cover, Descriptor, Intensity, Modifier, Phenomenon, PhenomenonClass,
        PresentWeather, Report, RunwayVisualRange, SkyLayer, VisualRange, Wind, WindDirection,
    },
    surface::SurfaceRow,
    time::resolve_observation_time,
};

#[doc(hidden)]
pub use crate::report::doctest;

pub mod groups;
pub mod units;

//
// Internal use only
//
mod decoder;
mod error;
mod report;
mod surface;
mod time;
mod utility;
