//! Integration tests for the prediction model's invariants.

use cfb_predictor::engine::noise::rolling_hash;
use cfb_predictor::engine::{PredictionStrategy, Predictor, StatsTable, TeamStatistics};
use std::sync::Arc;

const NAMES: [&str; 6] = ["Alabama", "Auburn", "Georgia", "Florida", "Navy", "UnknownTeamX"];

fn team(rating: f64, ppp: f64, conference: &str) -> TeamStatistics {
    TeamStatistics {
        offensive_rating: rating,
        defensive_rating: rating,
        efficiency_rating: rating,
        advanced_rating: rating,
        points_per_play: ppp,
        conference: conference.to_string(),
        ..TeamStatistics::default()
    }
}

fn sample_table() -> Arc<StatsTable> {
    Arc::new(StatsTable::from_entries(
        "test",
        vec![
            ("Alabama", team(4.0, 0.51, "SEC")),
            ("Auburn", team(38.0, 0.40, "SEC")),
            ("Georgia", team(2.0, 0.55, "SEC")),
            ("Florida", team(45.0, 0.39, "SEC")),
            ("Navy", team(57.0, 0.37, "American")),
        ],
    ))
}

fn predictors() -> Vec<Predictor> {
    let table = sample_table();
    vec![
        Predictor::with_stats(table.clone(), PredictionStrategy::Statistics),
        Predictor::with_stats(table, PredictionStrategy::Simple),
    ]
}

#[test]
fn test_deterministic() {
    for predictor in predictors() {
        for home in NAMES {
            for away in NAMES {
                let a = predictor.predict(home, away, 7);
                let b = predictor.predict(home, away, 7);
                assert_eq!(a, b);
                assert_eq!(a.spread_estimate.to_bits(), b.spread_estimate.to_bits());
            }
        }
    }
}

#[test]
fn test_probabilities_complement_exactly() {
    for predictor in predictors() {
        for week in 0..15 {
            for home in NAMES {
                for away in NAMES {
                    let p = predictor.predict(home, away, week);
                    assert_eq!(
                        p.home_win_probability + p.away_win_probability,
                        1.0,
                        "{home} vs {away} week {week}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_clamped_to_strategy_bounds() {
    for predictor in predictors() {
        let (lo, hi) = predictor.strategy().bounds();
        for week in 0..15 {
            for home in NAMES {
                for away in NAMES {
                    let p = predictor.predict(home, away, week).home_win_probability;
                    assert!(p >= lo && p <= hi, "got {p} for {home} vs {away}");
                }
            }
        }
    }
}

#[test]
fn test_clamped_for_adversarial_stats() {
    let extreme = [
        team(-1e9, 1e6, "X"),
        team(1e9, -1e6, "X"),
        team(0.0, 0.0, "Unknown"),
        team(100.0, 10.0, "Y"),
    ];
    for (i, a) in extreme.iter().enumerate() {
        for (j, b) in extreme.iter().enumerate() {
            let table = StatsTable::from_entries("test", vec![("H", a.clone()), ("A", b.clone())]);
            let predictor = Predictor::with_stats(table, PredictionStrategy::Statistics);
            let p = predictor.predict("H", "A", 1).home_win_probability;
            assert!((0.20..=0.85).contains(&p), "case {i}/{j}: got {p}");
        }
    }
}

#[test]
fn test_winner_and_confidence_consistent() {
    for predictor in predictors() {
        for week in 0..10 {
            for home in NAMES {
                for away in NAMES {
                    if home == away {
                        continue;
                    }
                    let p = predictor.predict(home, away, week);
                    assert_eq!(p.winner == home, p.home_win_probability > p.away_win_probability);
                    assert_eq!(p.confidence, p.home_win_probability.max(p.away_win_probability));
                    assert!(p.confidence >= 0.5);
                }
            }
        }
    }
}

#[test]
fn test_spread_sign_follows_probability() {
    for predictor in predictors() {
        for week in 0..10 {
            for home in NAMES {
                for away in NAMES {
                    let p = predictor.predict(home, away, week);
                    assert_eq!(p.spread_estimate > 0.0, p.home_win_probability > 0.5);
                }
            }
        }
    }
}

#[test]
fn test_unknown_teams_fall_back_to_defaults() {
    let predictor = Predictor::with_stats(sample_table(), PredictionStrategy::Statistics);
    let p = predictor.predict("UnknownTeamX", "UnknownTeamY", 1);
    assert!((p.home_win_probability - 0.55).abs() <= 0.05, "got {}", p.home_win_probability);
    assert!((p.away_win_probability - 0.45).abs() <= 0.05);
    assert_eq!(p.home_team, "UnknownTeamX");
    assert_eq!(p.away_team, "UnknownTeamY");
}

#[test]
fn test_any_names_are_accepted() {
    let predictor = Predictor::default();
    for (home, away) in [("", ""), ("🏈", "Ünïcødé"), ("a_b", "c_1"), (" ", "\t")] {
        let p = predictor.predict(home, away, u32::MAX);
        assert_eq!(p.home_win_probability + p.away_win_probability, 1.0);
    }
}

#[test]
fn test_hash_reference_value() {
    assert_eq!(rolling_hash("Alabama_Auburn_1"), 838_565_387);
}

#[test]
fn test_dominant_home_team_scenario() {
    let table = StatsTable::from_entries(
        "test",
        vec![("Alabama", team(10.0, 0.40, "SEC")), ("Auburn", team(90.0, 0.40, "SEC"))],
    );
    let predictor = Predictor::with_stats(table, PredictionStrategy::Statistics);
    let p = predictor.predict("Alabama", "Auburn", 1);
    assert_eq!(p.winner, "Alabama");
    assert!(p.home_win_probability > 0.70 && p.home_win_probability <= 0.85, "got {}", p.home_win_probability);

    // A lopsided offensive matchup on top pushes the blend past the cap.
    let table = StatsTable::from_entries(
        "test",
        vec![
            (
                "Alabama",
                TeamStatistics {
                    completion_rate: 0.75,
                    third_down_rate: 0.55,
                    opp_points_per_play: 0.25,
                    ..team(0.0, 3.0, "SEC")
                },
            ),
            ("Auburn", team(100.0, 0.30, "SEC")),
        ],
    );
    let predictor = Predictor::with_stats(table, PredictionStrategy::Statistics);
    assert_eq!(predictor.predict("Alabama", "Auburn", 1).home_win_probability, 0.85);
}

#[test]
fn test_shared_table_across_threads() {
    let predictor = Predictor::with_stats(sample_table(), PredictionStrategy::Statistics);
    let expected = predictor.predict("Georgia", "Florida", 9);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = predictor.clone();
            std::thread::spawn(move || p.predict("Georgia", "Florida", 9))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
