//! Cleaning and unit conversion for pregnancy records.

use crate::constants::cleaning::{AGEPREG_SCALE, MAX_PLAUSIBLE_BIRTHWGT_LB, NA_CODES};
use crate::constants::units::{KG_PER_LB, OZ_PER_LB};
use crate::data::PregnancyRecord;

/// Convert pounds to kilograms.
pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds * KG_PER_LB
}

/// Combine pound and ounce components into fractional pounds.
pub fn total_weight_lb(pounds: Option<i64>, ounces: Option<i64>) -> Option<f64> {
    Some(pounds? as f64 + ounces? as f64 / OZ_PER_LB)
}

/// Total birth weight in kilograms, `None` when the weight is missing.
pub fn total_weight_kg(record: &PregnancyRecord) -> Option<f64> {
    record.totalwgt_lb.map(pounds_to_kilograms)
}

/// Map NSFG "not ascertained / refused / don't know" codes to missing.
pub fn replace_na_codes(value: Option<i64>) -> Option<i64> {
    value.filter(|code| !NA_CODES.contains(code))
}

/// Normalize a raw pregnancy row.
///
/// Apply once per raw record: `agepreg` is rescaled from hundredths of a year
/// to years, implausible or sentinel birth weights become missing, and
/// `totalwgt_lb` is recomputed from the cleaned components.
pub fn clean_pregnancy(mut record: PregnancyRecord) -> PregnancyRecord {
    record.agepreg = record.agepreg.map(|age| age / AGEPREG_SCALE);
    record.birthwgt_lb = replace_na_codes(
        record
            .birthwgt_lb
            .filter(|pounds| *pounds <= MAX_PLAUSIBLE_BIRTHWGT_LB),
    );
    record.birthwgt_oz = replace_na_codes(record.birthwgt_oz);
    record.totalwgt_lb = total_weight_lb(record.birthwgt_lb, record.birthwgt_oz);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(lb: Option<i64>, oz: Option<i64>) -> PregnancyRecord {
        PregnancyRecord {
            caseid: 1,
            birthwgt_lb: lb,
            birthwgt_oz: oz,
            agepreg: Some(3316.0),
            ..PregnancyRecord::default()
        }
    }

    #[test]
    fn pounds_convert_to_kilograms() {
        assert!((pounds_to_kilograms(1.0) - 0.45359237).abs() < 1e-12);
        assert!((pounds_to_kilograms(8.8125) - 3.997_282_76).abs() < 1e-6);
    }

    #[test]
    fn total_weight_requires_both_components() {
        assert_eq!(total_weight_lb(Some(8), Some(13)), Some(8.8125));
        assert_eq!(total_weight_lb(Some(8), None), None);
        assert_eq!(total_weight_lb(None, Some(4)), None);
    }

    #[test]
    fn cleaning_rescales_age_and_derives_total_weight() {
        let cleaned = clean_pregnancy(raw(Some(8), Some(13)));
        assert_eq!(cleaned.agepreg, Some(33.16));
        assert_eq!(cleaned.totalwgt_lb, Some(8.8125));
        let kg = total_weight_kg(&cleaned).unwrap();
        assert!((kg - 8.8125 * 0.45359237).abs() < 1e-12);
    }

    #[test]
    fn cleaning_drops_sentinel_and_implausible_weights() {
        let sentinel = clean_pregnancy(raw(Some(98), Some(0)));
        assert_eq!(sentinel.birthwgt_lb, None);
        assert_eq!(sentinel.totalwgt_lb, None);

        let implausible = clean_pregnancy(raw(Some(51), Some(3)));
        assert_eq!(implausible.birthwgt_lb, None);

        let unknown_oz = clean_pregnancy(raw(Some(7), Some(99)));
        assert_eq!(unknown_oz.birthwgt_lb, Some(7));
        assert_eq!(unknown_oz.birthwgt_oz, None);
        assert_eq!(total_weight_kg(&unknown_oz), None);
    }
}
