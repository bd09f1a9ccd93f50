//! Scenario ranking and deduplication
//!
//! Selects the fastest, lowest-CO₂ and best-compromise scenarios, then
//! returns them ahead of the base scenarios with exact duplicates removed.

use std::collections::HashSet;

use crate::services::scenario::ScenarioRoute;

/// Rank scenarios and drop duplicate entries
///
/// Output order is `[fastest, lowest CO₂, compromise, base scenarios…]`,
/// deduplicated by the `label|distance|duration|co2` composite key, so a
/// selection that is literally one of the base scenarios appears once, in its
/// selection slot. Ties keep the first candidate. The compromise entry
/// carries its normalized score.
#[must_use]
pub fn rank_routes(scenarios: Vec<ScenarioRoute>) -> Vec<ScenarioRoute> {
    let Some(first) = scenarios.first() else {
        return Vec::new();
    };

    let mut fastest = first;
    let mut lowest_co2 = first;
    for route in &scenarios {
        if route.duration < fastest.duration {
            fastest = route;
        }
        if route.co2_emissions < lowest_co2.co2_emissions {
            lowest_co2 = route;
        }
    }

    let max_duration = scenarios
        .iter()
        .map(|r| r.duration)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_co2 = scenarios
        .iter()
        .map(|r| f64::from(r.co2_emissions))
        .fold(f64::NEG_INFINITY, f64::max);

    // Strict < keeps the first minimal scorer; NaN scores from an all-zero
    // column never displace it, matching the degenerate-trip behavior.
    let mut compromise = first;
    let mut best_score = compromise_score(first, max_duration, max_co2);
    for route in &scenarios {
        let score = compromise_score(route, max_duration, max_co2);
        if score < best_score {
            best_score = score;
            compromise = route;
        }
    }

    let mut compromise = compromise.clone();
    compromise.score = Some(best_score);

    let selections = vec![fastest.clone(), lowest_co2.clone(), compromise];

    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(scenarios.len());
    for route in selections.into_iter().chain(scenarios) {
        if seen.insert(route.dedup_key()) {
            unique.push(route);
        }
    }
    unique
}

fn compromise_score(route: &ScenarioRoute, max_duration: f64, max_co2: f64) -> f64 {
    route.duration / max_duration + f64::from(route.co2_emissions) / max_co2
}

#[cfg(test)]
mod tests {
    use crate::services::scenario::ScenarioKind;

    use super::*;

    fn route(kind: ScenarioKind, duration: f64, co2: u32) -> ScenarioRoute {
        ScenarioRoute {
            label: kind.label().to_string(),
            scenario: kind,
            modes: kind.modes(),
            distance: 10_000.0,
            duration,
            geometry: None,
            co2_emissions: co2,
            steps: vec![],
            score: None,
        }
    }

    fn base_set() -> Vec<ScenarioRoute> {
        vec![
            route(ScenarioKind::Car, 1200.0, 1930),
            route(ScenarioKind::Train, 1850.0, 89),
            route(ScenarioKind::Bus, 600.0, 1130),
            route(ScenarioKind::Bike, 1800.0, 0),
            route(ScenarioKind::Walk, 7200.0, 0),
            route(ScenarioKind::BusPlaneBus, 7800.0, 2850),
        ]
    }

    #[test]
    fn fastest_comes_first() {
        let ranked = rank_routes(base_set());
        assert_eq!(ranked[0].scenario, ScenarioKind::Bus);
        assert!((ranked[0].duration - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lowest_co2_comes_second() {
        let ranked = rank_routes(base_set());
        // bike and walk both emit 0; bike is encountered first
        assert_eq!(ranked[1].scenario, ScenarioKind::Bike);
    }

    #[test]
    fn compromise_carries_its_score() {
        let ranked = rank_routes(base_set());
        // max duration 7800, max co2 2850:
        // car 0.83, train 0.27, bus 0.47, bike 0.23, walk 0.92, flight 2.0
        // bike wins both lowest-CO2 and compromise, so the compromise clone
        // is deduplicated away and its score with it
        assert!(ranked.iter().all(|r| r.score.is_none()));

        // give bike slight emissions: walk becomes lowest-CO2 while bike
        // still has the best combined score, so all three slots differ
        let mut scenarios = base_set();
        scenarios[3].co2_emissions = 50;
        let ranked = rank_routes(scenarios);
        assert_eq!(ranked[0].scenario, ScenarioKind::Bus);
        assert_eq!(ranked[1].scenario, ScenarioKind::Walk);
        assert_eq!(ranked[2].scenario, ScenarioKind::Bike);
        let score = ranked[2].score.unwrap();
        assert!((score - (1800.0 / 7800.0 + 50.0 / 2850.0)).abs() < 1e-9);
    }

    #[test]
    fn duplicates_are_dropped_keeping_first() {
        let ranked = rank_routes(base_set());
        let mut keys = HashSet::new();
        for r in &ranked {
            assert!(keys.insert(r.dedup_key()), "duplicate {}", r.label);
        }
        // all six base scenarios survive, selections folded into them
        assert_eq!(ranked.len(), 6);
    }

    #[test]
    fn result_length_never_exceeds_six() {
        let ranked = rank_routes(base_set());
        assert!((3..=6).contains(&ranked.len()));
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let scenarios = vec![
            route(ScenarioKind::Car, 600.0, 500),
            route(ScenarioKind::Bus, 600.0, 500),
        ];
        let ranked = rank_routes(scenarios);
        assert_eq!(ranked[0].scenario, ScenarioKind::Car);
    }

    #[test]
    fn degenerate_all_zero_set_keeps_first_as_compromise() {
        let scenarios = vec![
            route(ScenarioKind::Car, 0.0, 0),
            route(ScenarioKind::Bike, 0.0, 0),
        ];
        let ranked = rank_routes(scenarios);
        // scores are NaN across the board; the first scenario holds every slot
        assert_eq!(ranked[0].scenario, ScenarioKind::Car);
        assert!(!ranked.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank_routes(Vec::new()).is_empty());
    }
}
