//! Degrees-minutes-seconds coordinate parsing and decimal conversion.
//!
//! A DMS token has the form `41° 15′ 31″ N`: integer degrees and minutes,
//! decimal seconds, and a hemisphere letter. ASCII `'` and `"` are accepted
//! in place of the typographic prime marks, and the degree sign is optional.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn dms_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^\s*(\d+)\s*°?\s*(\d+)\s*['′]\s*(\d+(?:\.\d+)?)\s*["″]\s*([NSEW])\s*$"#)
            .expect("DMS pattern compiles")
    })
}

/// Hemisphere letter of a DMS coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Sign applied to the decimal magnitude: -1 for South and West
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }

    /// Largest valid magnitude on this hemisphere's axis
    pub fn max_degrees(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::South => 90.0,
            Hemisphere::East | Hemisphere::West => 180.0,
        }
    }

    /// The opposite hemisphere on the same axis
    pub fn opposite(self) -> Self {
        match self {
            Hemisphere::North => Hemisphere::South,
            Hemisphere::South => Hemisphere::North,
            Hemisphere::East => Hemisphere::West,
            Hemisphere::West => Hemisphere::East,
        }
    }

    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        };
        write!(f, "{}", letter)
    }
}

/// A single DMS coordinate value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    hemisphere: Hemisphere,
}

impl Dms {
    /// Create a DMS value, validating field ranges.
    ///
    /// Minutes must be below 60, seconds in [0, 60), and the resulting
    /// magnitude must not exceed 90° for N/S or 180° for E/W.
    pub fn new(degrees: u32, minutes: u32, seconds: f64, hemisphere: Hemisphere) -> Result<Self> {
        if minutes >= 60 {
            return Err(Error::Format(format!("minutes out of range: {}", minutes)));
        }
        if !seconds.is_finite() || !(0.0..60.0).contains(&seconds) {
            return Err(Error::Format(format!("seconds out of range: {}", seconds)));
        }
        let dms = Self { degrees, minutes, seconds, hemisphere };
        let magnitude = dms.to_decimal().abs();
        if magnitude > hemisphere.max_degrees() {
            return Err(Error::Format(format!(
                "{}° exceeds {}° on hemisphere {}",
                magnitude,
                hemisphere.max_degrees(),
                hemisphere
            )));
        }
        Ok(dms)
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Convert to signed decimal degrees
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        magnitude * self.hemisphere.sign()
    }

    /// The same coordinate mirrored onto the opposite hemisphere
    pub fn mirrored(&self) -> Self {
        Self {
            hemisphere: self.hemisphere.opposite(),
            ..*self
        }
    }
}

impl FromStr for Dms {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let captures = dms_pattern()
            .captures(s)
            .ok_or_else(|| Error::Format(format!("not a DMS coordinate: {:?}", s)))?;

        // The pattern only admits digit runs, so the integer fields can
        // fail to parse only on overflow.
        let degrees: u32 = captures[1]
            .parse()
            .map_err(|_| Error::Format(format!("degrees out of range: {}", &captures[1])))?;
        let minutes: u32 = captures[2]
            .parse()
            .map_err(|_| Error::Format(format!("minutes out of range: {}", &captures[2])))?;
        let seconds: f64 = captures[3]
            .parse()
            .map_err(|_| Error::Format(format!("invalid seconds: {}", &captures[3])))?;
        let hemisphere = Hemisphere::from_letter(&captures[4])
            .ok_or_else(|| Error::Format(format!("invalid hemisphere: {}", &captures[4])))?;

        Dms::new(degrees, minutes, seconds, hemisphere)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}′ {}″ {}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

/// Parse a comma-separated DMS pair into decimal degrees.
///
/// The first token is taken as latitude and the second as longitude;
/// ordering is the caller's responsibility, though each token's hemisphere
/// letter still constrains its magnitude.
pub fn parse_pair(pair: &str) -> Result<(f64, f64)> {
    let (first, second) = pair
        .split_once(',')
        .ok_or_else(|| Error::Format(format!("expected two comma-separated coordinates: {:?}", pair)))?;
    let lat: Dms = first.parse()?;
    let lon: Dms = second.parse()?;
    Ok((lat.to_decimal(), lon.to_decimal()))
}

/// Convert a DMS coordinate pair to its decimal-degree text form.
///
/// Values are rendered with full f64 precision, no rounding:
///
/// ```
/// let decimal = terrakit_core::dms::convert("41° 15′ 31″ N, 95° 56′ 15″ W").unwrap();
/// assert_eq!(decimal, "41.25861111111111, -95.9375");
/// ```
pub fn convert(pair: &str) -> Result<String> {
    let (lat, lon) = parse_pair(pair)?;
    Ok(format!("{}, {}", lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_reference_pair() {
        let out = convert("41° 15′ 31″ N, 95° 56′ 15″ W").unwrap();
        assert_eq!(out, "41.25861111111111, -95.9375");

        let (lat, lon) = parse_pair("41° 15′ 31″ N, 95° 56′ 15″ W").unwrap();
        assert!((lat - 41.25861111111111).abs() < 1e-9);
        assert!((lon - -95.9375).abs() < 1e-9);
    }

    #[test]
    fn test_ascii_marks_and_loose_whitespace() {
        let (lat, lon) = parse_pair("41 15' 31\" N,95 56' 15\" W").unwrap();
        assert!((lat - 41.25861111111111).abs() < 1e-9);
        assert!((lon - -95.9375).abs() < 1e-9);
    }

    #[test]
    fn test_hemisphere_flip_negates() {
        let north: Dms = "41° 15′ 31″ N".parse().unwrap();
        let south = north.mirrored();
        assert!((north.to_decimal() + south.to_decimal()).abs() < 1e-12);
        // Double flip restores the original sign
        assert_eq!(south.mirrored().to_decimal(), north.to_decimal());
    }

    #[test]
    fn test_missing_hemisphere_is_format_error() {
        let err = convert("41° 15′ 31″, 95° 56′ 15″ W").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_wrong_separators_rejected() {
        assert!("41° 15m 31s N".parse::<Dms>().is_err());
        assert!("41:15:31 N".parse::<Dms>().is_err());
        assert!("41° 15′ 31″ Q".parse::<Dms>().is_err());
    }

    #[test]
    fn test_non_numeric_component_rejected() {
        assert!("forty° 15′ 31″ N".parse::<Dms>().is_err());
        assert!("41° 15′ 3x″ N".parse::<Dms>().is_err());
    }

    #[test]
    fn test_field_ranges() {
        assert!(Dms::new(41, 60, 0.0, Hemisphere::North).is_err());
        assert!(Dms::new(41, 15, 60.0, Hemisphere::North).is_err());
        assert!(Dms::new(41, 15, -1.0, Hemisphere::North).is_err());
        assert!(Dms::new(91, 0, 0.0, Hemisphere::North).is_err());
        assert!(Dms::new(181, 0, 0.0, Hemisphere::West).is_err());
        // 90°0′0″ N and 180°0′0″ W sit exactly on the limit
        assert!(Dms::new(90, 0, 0.0, Hemisphere::North).is_ok());
        assert!(Dms::new(180, 0, 0.0, Hemisphere::West).is_ok());
        // 91° is fine on the E/W axis
        assert!(Dms::new(91, 0, 0.0, Hemisphere::East).is_ok());
    }

    #[test]
    fn test_fractional_seconds() {
        let dms: Dms = "10° 30′ 30.6″ E".parse().unwrap();
        assert!((dms.to_decimal() - 10.5085).abs() < 1e-9);
    }

    #[test]
    fn test_missing_comma_is_format_error() {
        let err = parse_pair("41° 15′ 31″ N 95° 56′ 15″ W").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_display_round_trip() {
        let dms: Dms = "41° 15′ 31″ N".parse().unwrap();
        let again: Dms = dms.to_string().parse().unwrap();
        assert_eq!(dms, again);
    }
}
