use serde::{Deserialize, Serialize};

use crate::constants::columns::{
    AGE_R, AGEPREG, BASEWGT, BIRTHORD, BIRTHWGT_LB, BIRTHWGT_OZ, CASEID, FINALWGT, NUMBABES,
    OUTCOME, PARITY, PREGORDR, PRGLNGTH, TOTALWGT_LB,
};

pub use crate::types::CaseId;

/// A single typed cell value returned by column access.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Missing,
}

impl FieldValue {
    /// True when the cell holds no value.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Numeric view of the cell, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(value) => Some(*value as f64),
            FieldValue::Float(value) => Some(*value),
            FieldValue::Missing => None,
        }
    }

    /// Integer view of the cell. Floats are not truncated.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            FieldValue::Float(_) | FieldValue::Missing => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        value.map(FieldValue::Int).unwrap_or(FieldValue::Missing)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map(FieldValue::Float).unwrap_or(FieldValue::Missing)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::Float(value) => write!(f, "{value:.3}"),
            FieldValue::Missing => f.write_str("NaN"),
        }
    }
}

/// Records grouped by respondent expose their `caseid`.
pub trait Keyed {
    /// Respondent key for this record.
    fn respondent_key(&self) -> CaseId;
}

/// Name-based field access over a typed record.
pub trait FieldAccess {
    /// Column names in declaration order.
    const COLUMNS: &'static [&'static str];

    /// Value of column `name`, or `None` when the record has no such column.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// One row of the female pregnancy file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PregnancyRecord {
    pub caseid: CaseId,
    #[serde(default)]
    pub pregordr: Option<i64>,
    /// Outcome code; `1` is a live birth.
    #[serde(default)]
    pub outcome: Option<i64>,
    #[serde(default)]
    pub birthord: Option<i64>,
    /// Pregnancy length in weeks.
    #[serde(default)]
    pub prglngth: Option<i64>,
    #[serde(default)]
    pub birthwgt_lb: Option<i64>,
    #[serde(default)]
    pub birthwgt_oz: Option<i64>,
    /// Age at pregnancy end; hundredths of a year until cleaned.
    #[serde(default)]
    pub agepreg: Option<f64>,
    #[serde(default)]
    pub basewgt: Option<f64>,
    #[serde(default)]
    pub finalwgt: Option<f64>,
    /// Derived by `clean_pregnancy`; absent in the raw file.
    #[serde(default)]
    pub totalwgt_lb: Option<f64>,
}

impl Keyed for PregnancyRecord {
    fn respondent_key(&self) -> CaseId {
        self.caseid
    }
}

impl FieldAccess for PregnancyRecord {
    const COLUMNS: &'static [&'static str] = &[
        CASEID,
        PREGORDR,
        OUTCOME,
        BIRTHORD,
        PRGLNGTH,
        BIRTHWGT_LB,
        BIRTHWGT_OZ,
        AGEPREG,
        BASEWGT,
        FINALWGT,
        TOTALWGT_LB,
    ];

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value: FieldValue = match name {
            CASEID => FieldValue::Int(self.caseid),
            PREGORDR => self.pregordr.into(),
            OUTCOME => self.outcome.into(),
            BIRTHORD => self.birthord.into(),
            PRGLNGTH => self.prglngth.into(),
            BIRTHWGT_LB => self.birthwgt_lb.into(),
            BIRTHWGT_OZ => self.birthwgt_oz.into(),
            AGEPREG => self.agepreg.into(),
            BASEWGT => self.basewgt.into(),
            FINALWGT => self.finalwgt.into(),
            TOTALWGT_LB => self.totalwgt_lb.into(),
            _ => return None,
        };
        Some(value)
    }
}

/// One row of the female respondent file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RespondentRecord {
    pub caseid: CaseId,
    /// Age at interview, in years.
    #[serde(default)]
    pub age_r: Option<i64>,
    #[serde(default)]
    pub numbabes: Option<i64>,
    #[serde(default)]
    pub parity: Option<i64>,
    #[serde(default)]
    pub finalwgt: Option<f64>,
}

impl Keyed for RespondentRecord {
    fn respondent_key(&self) -> CaseId {
        self.caseid
    }
}

impl FieldAccess for RespondentRecord {
    const COLUMNS: &'static [&'static str] = &[CASEID, AGE_R, NUMBABES, PARITY, FINALWGT];

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value: FieldValue = match name {
            CASEID => FieldValue::Int(self.caseid),
            AGE_R => self.age_r.into(),
            NUMBABES => self.numbabes.into(),
            PARITY => self.parity.into(),
            FINALWGT => self.finalwgt.into(),
            _ => return None,
        };
        Some(value)
    }
}
