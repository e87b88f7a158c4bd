use std::path::PathBuf;

use nsfg::constants::columns::{AGE_R, OUTCOME, PRGLNGTH};
use nsfg::conversions::{pounds_to_kilograms, total_weight_kg};
use nsfg::example_apps::{load_pregnancies, load_respondents};
use nsfg::{ExploreConfig, FieldValue, IndexError, SurveyError};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("data")
        .join(name)
}

fn config() -> ExploreConfig {
    ExploreConfig {
        pregnancy_path: data_path("2002FemPreg.jsonl"),
        respondent_path: Some(data_path("2002FemResp.jsonl")),
        ..ExploreConfig::default()
    }
}

#[test]
fn caseid_10229_outcomes_through_the_index() {
    let preg = load_pregnancies(&config()).unwrap();
    let index = preg.record_index();

    let positions = index.lookup(10229).unwrap();
    assert_eq!(positions.len(), 7);
    let outcomes = preg.column_at_positions(OUTCOME, positions).unwrap();
    let codes: Vec<Option<i64>> = outcomes.iter().map(FieldValue::as_i64).collect();
    assert_eq!(
        codes,
        vec![Some(4), Some(4), Some(4), Some(4), Some(4), Some(4), Some(1)]
    );

    assert!(matches!(
        preg.resolve(&index, 9999),
        Err(SurveyError::Index(IndexError::KeyNotFound { key: 9999 }))
    ));
}

#[test]
fn respondent_filter_matches_index_rows() {
    let preg = load_pregnancies(&config()).unwrap();
    let index = preg.record_index();

    let filtered = preg.filter_by_key(2298);
    let resolved = preg.resolve(&index, 2298).unwrap();
    assert_eq!(filtered, resolved);

    let lengths = preg
        .column_at_positions(PRGLNGTH, index.lookup(2298).unwrap())
        .unwrap();
    assert_eq!(
        lengths,
        vec![
            FieldValue::Int(40),
            FieldValue::Int(36),
            FieldValue::Int(30),
            FieldValue::Int(40)
        ]
    );
    // Pregnancy 3 was coded 99/99 and is cleaned to missing.
    assert_eq!(resolved[2].totalwgt_lb, None);
}

#[test]
fn respondent_age_and_first_baby_weight() {
    let cfg = config();
    let resp = load_respondents(cfg.respondent_path.as_ref().unwrap(), false).unwrap();
    let rows = resp.filter_by_key(2298);
    assert_eq!(rows.len(), 1);
    assert_eq!(resp.value(3, AGE_R).unwrap(), FieldValue::Int(34));

    let preg = load_pregnancies(&cfg).unwrap();
    let index = preg.record_index();
    let first = preg
        .resolve(&index, 5012)
        .unwrap()
        .into_iter()
        .find(|record| record.birthord == Some(1))
        .unwrap();
    assert_eq!(first.totalwgt_lb, Some(6.0));
}

#[test]
fn derived_kilogram_column_tracks_pound_column() {
    let preg = load_pregnancies(&config()).unwrap();
    let kg = preg.derive("totalwgt_kg", total_weight_kg);
    assert_eq!(kg.values.len(), preg.len());
    for (record, value) in preg.records().iter().zip(&kg.values) {
        assert_eq!(*value, record.totalwgt_lb.map(pounds_to_kilograms));
    }
    assert!((kg.values[0].unwrap() - 8.8125 * 0.45359237).abs() < 1e-9);
}
