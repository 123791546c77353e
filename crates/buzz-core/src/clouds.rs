//! Cloud preset catalogue and cloud/fog generation

use crate::archetype::{CloudRule, FogRule};
use crate::types::{Clouds, Fog, Precipitation};
use crate::units::Distance;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Named cloud layer understood by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CloudPreset {
    pub name: &'static str,
    pub ui_name: &'static str,
    /// Lowest allowed cloud base in metres
    pub min_base: u32,
    /// Highest allowed cloud base in metres
    pub max_base: u32,
}

impl CloudPreset {
    const fn new(name: &'static str, ui_name: &'static str, min_base: u32, max_base: u32) -> Self {
        Self {
            name,
            ui_name,
            min_base,
            max_base,
        }
    }

    pub fn is_rain(&self) -> bool {
        self.name.contains("Rain")
    }
}

pub static CLOUD_PRESETS: [CloudPreset; 30] = [
    CloudPreset::new("Preset1", "Light Scattered 1", 840, 4200),
    CloudPreset::new("Preset2", "Light Scattered 2", 1260, 2520),
    CloudPreset::new("Preset3", "High Scattered 1", 840, 2520),
    CloudPreset::new("Preset4", "High Scattered 2", 1260, 2520),
    CloudPreset::new("Preset5", "Scattered 1", 1260, 4620),
    CloudPreset::new("Preset6", "Scattered 2", 1260, 4200),
    CloudPreset::new("Preset7", "Scattered 3", 1680, 5040),
    CloudPreset::new("Preset8", "High Scattered 3", 3780, 5460),
    CloudPreset::new("Preset9", "Scattered 4", 1680, 3780),
    CloudPreset::new("Preset10", "Scattered 5", 1260, 4200),
    CloudPreset::new("Preset11", "Scattered 6", 2520, 5460),
    CloudPreset::new("Preset12", "Scattered 7", 1680, 3360),
    CloudPreset::new("Preset13", "Broken 1", 1680, 3360),
    CloudPreset::new("Preset14", "Broken 2", 1680, 3360),
    CloudPreset::new("Preset15", "Broken 3", 840, 5040),
    CloudPreset::new("Preset16", "Broken 4", 1260, 4200),
    CloudPreset::new("Preset17", "Broken 5", 0, 2520),
    CloudPreset::new("Preset18", "Broken 6", 0, 3780),
    CloudPreset::new("Preset19", "Broken 7", 0, 2940),
    CloudPreset::new("Preset20", "Broken 8", 0, 3780),
    CloudPreset::new("Preset21", "Overcast 1", 1260, 4200),
    CloudPreset::new("Preset22", "Overcast 2", 420, 4200),
    CloudPreset::new("Preset23", "Overcast 3", 840, 3360),
    CloudPreset::new("Preset24", "Overcast 4", 420, 2520),
    CloudPreset::new("Preset25", "Overcast 5", 420, 3360),
    CloudPreset::new("Preset26", "Overcast 6", 420, 2940),
    CloudPreset::new("Preset27", "Overcast 7", 420, 2520),
    CloudPreset::new("RainyPreset1", "Overcast And Rain 1", 420, 2940),
    CloudPreset::new("RainyPreset2", "Overcast And Rain 2", 840, 2520),
    CloudPreset::new("RainyPreset3", "Overcast And Rain 3", 840, 2520),
];

/// Presets with or without rain
pub fn presets(rain: bool) -> impl Iterator<Item = &'static CloudPreset> {
    CLOUD_PRESETS.iter().filter(move |p| p.is_rain() == rain)
}

impl Clouds {
    /// Random preset of the requested kind, base drawn within the preset's range
    pub fn random_preset<R: Rng + ?Sized>(rain: bool, rng: &mut R) -> Option<Clouds> {
        let candidates: Vec<&'static CloudPreset> = presets(rain).collect();
        let preset = *candidates.choose(rng)?;
        Some(Clouds {
            base: rng.gen_range(preset.min_base..=preset.max_base),
            density: 0,
            thickness: 0,
            precipitation: Precipitation::None,
            preset: Some(preset),
        })
    }
}

const STORM_BASE: (u32, u32) = (2000, 3000);
const STORM_DENSITY: (u32, u32) = (9, 10);
const STORM_THICKNESS: (u32, u32) = (100, 400);

/// Cloud layer for an archetype's cloud rule
pub fn generate_clouds<R: Rng + ?Sized>(rule: CloudRule, rng: &mut R) -> Option<Clouds> {
    match rule {
        CloudRule::Clear => None,
        CloudRule::Preset { rain } => Clouds::random_preset(rain, rng),
        CloudRule::Storm => Some(Clouds {
            base: rng.gen_range(STORM_BASE.0..=STORM_BASE.1),
            density: rng.gen_range(STORM_DENSITY.0..=STORM_DENSITY.1),
            thickness: rng.gen_range(STORM_THICKNESS.0..=STORM_THICKNESS.1),
            precipitation: Precipitation::Thunderstorm,
            preset: None,
        }),
    }
}

const FOG_VISIBILITY: (u32, u32) = (2500, 5000);
const FOG_THICKNESS: (u32, u32) = (100, 500);

/// Fog layer for an archetype's fog rule
pub fn generate_fog<R: Rng + ?Sized>(rule: FogRule, rng: &mut R) -> Option<Fog> {
    match rule {
        FogRule::Never => None,
        FogRule::OneIn(n) => {
            if rng.gen_range(0..n) != 0 {
                return None;
            }
            Some(Fog {
                visibility: Distance::from_meters(
                    rng.gen_range(FOG_VISIBILITY.0..=FOG_VISIBILITY.1) as f64,
                ),
                thickness: rng.gen_range(FOG_THICKNESS.0..=FOG_THICKNESS.1),
            })
        }
    }
}
