//! Properties checked over every reachable camera setting for every scene.

use light_catcher::core::{evaluate_round, exposure_value, SceneCatalog};
use light_catcher::types::{
    Classification, Locale, OutcomeImage, ParameterSet, APERTURES, EV_EPSILON, ISOS,
    SHUTTER_DENOMINATORS,
};

fn all_settings() -> impl Iterator<Item = ParameterSet> {
    (0..APERTURES.len()).flat_map(|a| {
        (0..SHUTTER_DENOMINATORS.len()).flat_map(move |s| {
            (0..ISOS.len()).filter_map(move |i| ParameterSet::from_indices(a, s, i))
        })
    })
}

#[test]
fn every_setting_is_reachable() {
    assert_eq!(
        all_settings().count(),
        APERTURES.len() * SHUTTER_DENOMINATORS.len() * ISOS.len()
    );
}

#[test]
fn score_bounds_and_full_marks_only_for_exact_match() {
    let catalog = SceneCatalog::builtin();
    for scene in catalog.iter() {
        for params in all_settings() {
            let result = evaluate_round(&params, scene, Locale::En);
            assert!(result.score <= 100);
            let exact = result.ev_difference.abs() < EV_EPSILON;
            assert_eq!(result.score == 100, exact, "{params} in {}", scene.id);
        }
    }
}

#[test]
fn classification_follows_bands() {
    let catalog = SceneCatalog::builtin();
    for scene in catalog.iter() {
        for params in all_settings() {
            let result = evaluate_round(&params, scene, Locale::En);
            let d = result.ev_difference;
            let expected = if d.abs() < 1.0 {
                Classification::Perfect
            } else if d > 1.5 {
                Classification::Over
            } else if d < -1.5 {
                Classification::Under
            } else if d > 0.0 {
                Classification::SlightOver
            } else {
                Classification::SlightUnder
            };
            assert_eq!(result.classification, expected, "{params} in {}", scene.id);
        }
    }
}

#[test]
fn outcome_image_follows_coarse_threshold() {
    let catalog = SceneCatalog::builtin();
    for scene in catalog.iter() {
        for params in all_settings() {
            let result = evaluate_round(&params, scene, Locale::ZhTw);
            let expected = if result.current_ev > result.target_ev + 1.5 {
                (OutcomeImage::OverExposed, scene.over_exposed.as_str())
            } else if result.current_ev < result.target_ev - 1.5 {
                (OutcomeImage::UnderExposed, scene.under_exposed.as_str())
            } else {
                (OutcomeImage::Balanced, scene.background.as_str())
            };
            assert_eq!((result.outcome, result.outcome_image_ref.as_str()), expected);
        }
    }
}

#[test]
fn score_never_increases_with_distance() {
    let catalog = SceneCatalog::builtin();
    let scene = catalog.get_scene(2).unwrap();
    let mut results: Vec<_> = all_settings()
        .map(|p| evaluate_round(&p, scene, Locale::En))
        .collect();
    results.sort_by(|a, b| {
        a.ev_difference
            .abs()
            .partial_cmp(&b.ev_difference.abs())
            .unwrap()
    });
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn ev_increases_along_every_stop_table() {
    for params in all_settings() {
        let ev = exposure_value(&params);
        for (a, s, i) in [(1, 0, 0), (0, 1, 0), (0, 0, 1)] {
            if let Some(next) = ParameterSet::from_indices(
                params.aperture.index() + a,
                params.shutter.index() + s,
                params.iso.index() + i,
            ) {
                assert!(exposure_value(&next) > ev, "{params} -> {next}");
            }
        }
    }
}
