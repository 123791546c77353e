//! Physical quantities used by the generator
//!
//! Pressure is kept in inches of mercury because the seasonal profiles and
//! the altimeter clamping bounds are expressed in inHg.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Hectopascals per inch of mercury
pub const HPA_PER_INHG: f64 = 33.8639;

/// Knots per metre per second
pub const KNOTS_PER_MPS: f64 = 1.943844;

/// Sea-level pressure
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pressure {
    inches_hg: f64,
}

impl Pressure {
    pub fn from_inches_hg(inches_hg: f64) -> Self {
        Self { inches_hg }
    }

    pub fn from_hecto_pascals(hpa: f64) -> Self {
        Self {
            inches_hg: hpa / HPA_PER_INHG,
        }
    }

    pub fn inches_hg(&self) -> f64 {
        self.inches_hg
    }

    pub fn hecto_pascals(&self) -> f64 {
        self.inches_hg * HPA_PER_INHG
    }
}

/// Wind speed
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Speed {
    meters_per_second: f64,
}

impl Speed {
    pub const ZERO: Speed = Speed {
        meters_per_second: 0.0,
    };

    pub const fn from_meters_per_second(mps: f64) -> Self {
        Self {
            meters_per_second: mps,
        }
    }

    pub fn from_knots(knots: f64) -> Self {
        Self {
            meters_per_second: knots / KNOTS_PER_MPS,
        }
    }

    pub fn meters_per_second(&self) -> f64 {
        self.meters_per_second
    }

    pub fn knots(&self) -> f64 {
        self.meters_per_second * KNOTS_PER_MPS
    }

    /// The faster of two speeds
    pub fn max(self, other: Speed) -> Speed {
        if other.meters_per_second > self.meters_per_second {
            other
        } else {
            self
        }
    }
}

/// Compass heading in whole degrees, always in `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", from = "i32")]
pub struct Heading {
    degrees: i32,
}

impl Heading {
    pub fn from_degrees(degrees: i32) -> Self {
        Self {
            degrees: degrees.rem_euclid(360),
        }
    }

    /// Uniform integer heading in the inclusive range `[min, max]`
    pub fn random<R: Rng + ?Sized>(min: i32, max: i32, rng: &mut R) -> Self {
        Self::from_degrees(rng.gen_range(min..=max))
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn opposite(&self) -> Self {
        Self::from_degrees(self.degrees + 180)
    }
}

impl Add for Heading {
    type Output = Heading;

    fn add(self, rhs: Heading) -> Heading {
        Heading::from_degrees(self.degrees + rhs.degrees)
    }
}

impl From<i32> for Heading {
    fn from(degrees: i32) -> Self {
        Heading::from_degrees(degrees)
    }
}

impl From<Heading> for i32 {
    fn from(heading: Heading) -> Self {
        heading.degrees
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.degrees)
    }
}

/// Horizontal distance (fog visibility)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    pub fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    pub fn meters(&self) -> f64 {
        self.meters
    }
}
