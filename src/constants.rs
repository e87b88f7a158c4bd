/// Canonical NSFG column names used by the typed record structures.
pub mod columns {
    /// Respondent identifier column.
    pub const CASEID: &str = "caseid";
    /// Pregnancy order within a respondent.
    pub const PREGORDR: &str = "pregordr";
    /// Pregnancy outcome code (1 = live birth).
    pub const OUTCOME: &str = "outcome";
    /// Birth order for live births.
    pub const BIRTHORD: &str = "birthord";
    /// Pregnancy length in weeks.
    pub const PRGLNGTH: &str = "prglngth";
    /// Birth weight, pounds component.
    pub const BIRTHWGT_LB: &str = "birthwgt_lb";
    /// Birth weight, ounces component.
    pub const BIRTHWGT_OZ: &str = "birthwgt_oz";
    /// Respondent age at the end of the pregnancy.
    pub const AGEPREG: &str = "agepreg";
    /// Base sampling weight.
    pub const BASEWGT: &str = "basewgt";
    /// Final post-stratified sampling weight.
    pub const FINALWGT: &str = "finalwgt";
    /// Total birth weight in pounds, derived during cleaning.
    pub const TOTALWGT_LB: &str = "totalwgt_lb";
    /// Total birth weight in kilograms, derived on demand.
    pub const TOTALWGT_KG: &str = "totalwgt_kg";
    /// Respondent age at interview.
    pub const AGE_R: &str = "age_r";
    /// Number of babies born alive.
    pub const NUMBABES: &str = "numbabes";
    /// Number of live births.
    pub const PARITY: &str = "parity";
}

/// Constants used when cleaning raw NSFG codes.
pub mod cleaning {
    /// Sentinel codes for "not ascertained", "refused", and "don't know".
    pub const NA_CODES: [i64; 3] = [97, 98, 99];
    /// Pound values above this are treated as coding errors.
    pub const MAX_PLAUSIBLE_BIRTHWGT_LB: i64 = 20;
    /// `agepreg` is recorded in hundredths of a year.
    pub const AGEPREG_SCALE: f64 = 100.0;
}

/// Unit conversion factors.
pub mod units {
    /// Exact international avoirdupois pound in kilograms.
    pub const KG_PER_LB: f64 = 0.453_592_37;
    /// Ounces per pound.
    pub const OZ_PER_LB: f64 = 16.0;
}

/// Constants used by the exploration CLI.
pub mod explore {
    /// Respondent used by the notebook's index example.
    pub const DEFAULT_CASEID: i64 = 10229;
    /// Rows shown by `head`.
    pub const DEFAULT_HEAD_ROWS: usize = 5;
    /// Environment variable overriding the pregnancy file location.
    pub const PREG_PATH_ENV: &str = "NSFG_PREG_PATH";
    /// Environment variable overriding the respondent file location.
    pub const RESP_PATH_ENV: &str = "NSFG_RESP_PATH";
    /// Default pregnancy file candidates, relative to the working directory.
    pub const DEFAULT_PREG_PATHS: [&str; 2] =
        ["demos/data/2002FemPreg.jsonl", "../demos/data/2002FemPreg.jsonl"];
    /// Default respondent file candidates, relative to the working directory.
    pub const DEFAULT_RESP_PATHS: [&str; 2] =
        ["demos/data/2002FemResp.jsonl", "../demos/data/2002FemResp.jsonl"];
    /// Source id assigned to pregnancy records.
    pub const PREG_SOURCE_ID: &str = "2002FemPreg";
    /// Source id assigned to respondent records.
    pub const RESP_SOURCE_ID: &str = "2002FemResp";
}

/// Constants used by the JSON-lines transport.
pub mod transport {
    /// File extensions recognized as JSON-lines input.
    pub const JSON_LINES_EXTENSIONS: [&str; 2] = ["jsonl", "ndjson"];
}
