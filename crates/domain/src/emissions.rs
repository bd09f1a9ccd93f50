//! CO₂ emission model
//!
//! Maps a transport mode and a distance to an emission estimate using fixed
//! per-kilometer factors (ADEME averages). Mode matching is deliberately
//! forgiving: the input is free text coming from API payloads and scenario
//! descriptors, and an unrecognized mode falls back to the car factor rather
//! than failing.

/// Emission factor for a private car, in grams of CO₂ per kilometer
pub const CAR_GRAMS_PER_KM: f64 = 193.0;
/// Emission factor for a thermal bus, in grams of CO₂ per kilometer
pub const BUS_GRAMS_PER_KM: f64 = 113.0;
/// Emission factor for a high-speed train, in grams of CO₂ per kilometer
pub const TRAIN_GRAMS_PER_KM: f64 = 8.9;
/// Emission factor for a plane, in grams of CO₂ per kilometer
pub const PLANE_GRAMS_PER_KM: f64 = 285.0;

/// Estimate CO₂ emissions in grams for a distance travelled with a mode
///
/// Matching rules, in priority order (case-insensitive, substring):
/// 1. Text containing `walk`, `foot`, `bike` or `bicycle` emits nothing.
/// 2. Exact factor table lookup for `car`, `bus`, `train`, `plane`.
/// 3. Anything else uses the car factor.
///
/// The result is rounded to the nearest gram. Never fails.
#[must_use]
pub fn co2_emissions_grams(distance_meters: f64, mode: &str) -> u32 {
    let mode = mode.to_lowercase();
    if ["walk", "foot", "bike", "bicycle"]
        .iter()
        .any(|m| mode.contains(m))
    {
        return 0;
    }

    let factor = match mode.as_str() {
        "bus" => BUS_GRAMS_PER_KM,
        "train" => TRAIN_GRAMS_PER_KM,
        "plane" => PLANE_GRAMS_PER_KM,
        // "car" and every unrecognized mode
        _ => CAR_GRAMS_PER_KM,
    };

    let distance_km = distance_meters / 1000.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (distance_km * factor).round().max(0.0) as u32
    }
}
