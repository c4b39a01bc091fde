//! Field descriptor tables: one entry per canonical ADIF field.
//!
//! Catalog order here is emission order for `stringify`. Custom checks run
//! after the primitive type check, so they may assume a parseable value.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::FieldDef;
use crate::schema::enums;
use crate::types::DataType;

static ADIF_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]\.[0-9]$").expect("static pattern"));

static TIMESTAMP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8} [0-9]{6}$").expect("static pattern"));

fn upper(value: &str) -> String {
    value.to_ascii_uppercase()
}

fn lower(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Folds out-of-range azimuths into [0, 360): wraps by modulus above 360,
/// mirrors negatives up from 360. Unparseable input passes through.
fn fold_azimuth(value: &str) -> String {
    let Ok(az) = value.parse::<f64>() else {
        return value.to_string();
    };
    if az > 360.0 {
        format!("{}", az % 360.0)
    } else if az < 0.0 {
        format!("{}", 360.0 - (az.abs() % 360.0))
    } else {
        value.to_string()
    }
}

/// Elevation fold with modulus 90. This does not correctly re-map
/// elevations beyond ±90° (a ±180° fold would); kept as-is pending
/// confirmation of the intended behavior.
fn fold_elevation(value: &str) -> String {
    let Ok(el) = value.parse::<f64>() else {
        return value.to_string();
    };
    if el > 90.0 {
        format!("{}", el % 90.0)
    } else if el < 0.0 {
        format!("{}", 90.0 - (el.abs() % 90.0))
    } else {
        value.to_string()
    }
}

fn in_range_f(value: &str, lo: f64, hi: f64) -> bool {
    value.parse::<f64>().is_ok_and(|n| lo <= n && n <= hi)
}

fn in_range_i(value: &str, lo: i64, hi: i64) -> bool {
    value.parse::<i64>().is_ok_and(|n| lo <= n && n <= hi)
}

fn age_range(value: &str) -> bool {
    in_range_f(value, 0.0, 120.0)
}

fn azimuth_range(value: &str) -> bool {
    in_range_f(value, 0.0, 360.0)
}

fn elevation_range(value: &str) -> bool {
    in_range_f(value, -90.0, 90.0)
}

fn a_index_range(value: &str) -> bool {
    in_range_f(value, 0.0, 400.0)
}

fn k_index_range(value: &str) -> bool {
    in_range_i(value, 0, 9)
}

fn sfi_range(value: &str) -> bool {
    in_range_i(value, 0, 300)
}

fn zone_40(value: &str) -> bool {
    in_range_i(value, 1, 40)
}

fn zone_90(value: &str) -> bool {
    in_range_i(value, 1, 90)
}

fn island_id(value: &str) -> bool {
    in_range_i(value, 1, 99_999_999)
}

fn non_negative(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(|n| n >= 0.0)
}

fn non_negative_int(value: &str) -> bool {
    value.parse::<i64>().is_ok_and(|n| n >= 0)
}

/// `YYYYMMDD HHMMSS`, both halves valid under their primitive types.
fn timestamp_parts(value: &str) -> bool {
    match value.split_once(' ') {
        Some((date, time)) => DataType::Date.check(date) && DataType::Time.check(time),
        None => false,
    }
}

/// Credits are comma-separated; each is either a bare credit key or
/// `credit:medium&medium...` where every medium is a QSL medium.
fn credit_list(value: &str) -> bool {
    value.split(',').all(|credit| {
        if enums::CREDIT.contains(credit) {
            return true;
        }
        let Some((name, mediums)) = credit.split_once(':') else {
            return false;
        };
        enums::CREDIT.contains(name) && mediums.split('&').all(|m| enums::QSL_MEDIUM.contains(m))
    })
}

/// VUCC grid lists carry exactly 2 or 4 corners, each a 4-character square.
fn vucc_grids(value: &str) -> bool {
    let count = value.split(',').count();
    (count == 2 || count == 4) && value.split(',').all(|grid| grid.len() == 4)
}

/// Header-record field descriptors in catalog (emission) order.
pub static HEADER_DEFS: &[FieldDef] = &[
    FieldDef::new("ADIF_VER", DataType::String)
        .indicator('S')
        .pattern(&ADIF_VERSION_PATTERN),
    FieldDef::new("CREATED_TIMESTAMP", DataType::String)
        .indicator('S')
        .pattern(&TIMESTAMP_PATTERN)
        .check(timestamp_parts),
    FieldDef::new("PROGRAMID", DataType::String).indicator('S'),
    FieldDef::new("PROGRAMVERSION", DataType::String).indicator('S'),
];

/// QSO-record field descriptors in catalog (emission) order.
pub static QSO_DEFS: &[FieldDef] = &[
    FieldDef::new("ADDRESS", DataType::MultilineString).indicator('M'),
    FieldDef::new("AGE", DataType::Number).indicator('N').check(age_range),
    FieldDef::new("ALTITUDE", DataType::Number).indicator('N'),
    FieldDef::new("ANT_AZ", DataType::Number)
        .indicator('N')
        .check(azimuth_range)
        .normalize_with(fold_azimuth),
    FieldDef::new("ANT_EL", DataType::Number)
        .indicator('N')
        .check(elevation_range)
        .normalize_with(fold_elevation),
    FieldDef::new("ANT_PATH", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::ANT_PATH)
        .normalize_with(upper),
    FieldDef::new("APP_TCADIF_KEY", DataType::Enumeration).indicator('E'),
    FieldDef::new("APP_TCADIF_MY_KEY", DataType::Enumeration).indicator('E'),
    FieldDef::new("APP_TCADIF_QSO_ID", DataType::Uuid),
    FieldDef::new("ARRL_SECT", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::ARRL_SECTION)
        .normalize_with(upper),
    FieldDef::new("AWARD_SUBMITTED", DataType::SponsoredAwardList),
    FieldDef::new("AWARD_GRANTED", DataType::SponsoredAwardList),
    FieldDef::new("A_INDEX", DataType::Number).indicator('N').check(a_index_range),
    FieldDef::new("BAND", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::BAND)
        .normalize_with(lower),
    FieldDef::new("BAND_RX", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::BAND)
        .normalize_with(lower),
    FieldDef::new("CALL", DataType::String).indicator('S').normalize_with(upper),
    FieldDef::new("CHECK", DataType::String).indicator('S'),
    FieldDef::new("CLASS", DataType::String).indicator('S'),
    FieldDef::new("CLUBLOG_QSO_UPLOAD_DATE", DataType::Date).indicator('D'),
    FieldDef::new("CLUBLOG_QSO_UPLOAD_STATUS", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_UPLOAD_STATUS),
    FieldDef::new("CNTY", DataType::String).indicator('S'),
    FieldDef::new("COMMENT", DataType::String).indicator('S'),
    FieldDef::new("CONT", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::CONTINENT),
    FieldDef::new("CONTACTED_OP", DataType::String).indicator('S').normalize_with(upper),
    FieldDef::new("CONTEST_ID", DataType::String).indicator('S'),
    FieldDef::new("COUNTRY", DataType::String).indicator('S'),
    FieldDef::new("CQZ", DataType::PositiveInteger).check(zone_40),
    FieldDef::new("CREDIT_SUBMITTED", DataType::CreditList).check(credit_list),
    FieldDef::new("CREDIT_GRANTED", DataType::CreditList).check(credit_list),
    FieldDef::new("DARC_DOK", DataType::String),
    FieldDef::new("DISTANCE", DataType::Number).indicator('N').check(non_negative),
    FieldDef::new("DXCC", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::DXCC),
    FieldDef::new("EMAIL", DataType::String).indicator('S'),
    FieldDef::new("EQ_CALL", DataType::String).indicator('S').normalize_with(upper),
    FieldDef::new("EQSL_QSLRDATE", DataType::Date).indicator('D'),
    FieldDef::new("EQSL_QSLSDATE", DataType::Date).indicator('D'),
    FieldDef::new("EQSL_QSL_RCVD", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_RCVD)
        .normalize_with(upper),
    FieldDef::new("EQSL_QSL_SENT", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_SENT)
        .normalize_with(upper),
    FieldDef::new("FISTS", DataType::PositiveInteger),
    FieldDef::new("FISTS_CC", DataType::PositiveInteger),
    FieldDef::new("FORCE_INIT", DataType::Boolean).indicator('B'),
    FieldDef::new("FREQ", DataType::Number).indicator('N'),
    FieldDef::new("FREQ_RX", DataType::Number).indicator('N'),
    FieldDef::new("GRIDSQUARE", DataType::GridSquare).normalize_with(upper),
    FieldDef::new("GRIDSQUARE_EXT", DataType::GridSquareExt).normalize_with(upper),
    FieldDef::new("HAMLOGEU_QSO_UPLOAD_DATE", DataType::Date).indicator('D'),
    FieldDef::new("HAMLOGEU_QSO_UPLOAD_STATUS", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_UPLOAD_STATUS),
    FieldDef::new("HAMQTH_QSO_UPLOAD_DATE", DataType::Date).indicator('D'),
    FieldDef::new("HAMQTH_QSO_UPLOAD_STATUS", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_UPLOAD_STATUS),
    FieldDef::new("HRDLOG_QSO_UPLOAD_DATE", DataType::Date).indicator('D'),
    FieldDef::new("HRDLOG_QSO_UPLOAD_STATUS", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_UPLOAD_STATUS),
    FieldDef::new("IOTA", DataType::IotaRef),
    FieldDef::new("IOTA_ISLAND_ID", DataType::PositiveInteger).check(island_id),
    FieldDef::new("ITUZ", DataType::PositiveInteger).check(zone_90),
    FieldDef::new("K_INDEX", DataType::Integer).check(k_index_range),
    FieldDef::new("LAT", DataType::Location).indicator('L').normalize_with(upper),
    FieldDef::new("LON", DataType::Location).indicator('L').normalize_with(upper),
    FieldDef::new("LOTW_QSLRDATE", DataType::Date).indicator('D'),
    FieldDef::new("LOTW_QSLSDATE", DataType::Date).indicator('D'),
    FieldDef::new("LOTW_QSL_RCVD", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_RCVD)
        .normalize_with(upper),
    FieldDef::new("LOTW_QSL_SENT", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_SENT)
        .normalize_with(upper),
    FieldDef::new("MAX_BURSTS", DataType::Number).check(non_negative),
    FieldDef::new("MODE", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::MODE)
        .normalize_with(upper),
    FieldDef::new("MS_SHOWER", DataType::String).indicator('S'),
    FieldDef::new("MY_ALTITUDE", DataType::Number).indicator('N'),
    FieldDef::new("MY_ANTENNA", DataType::String).indicator('S'),
    FieldDef::new("MY_ARRL_SECT", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::ARRL_SECTION)
        .normalize_with(upper),
    FieldDef::new("MY_CITY", DataType::String).indicator('S'),
    FieldDef::new("MY_CNTY", DataType::String).indicator('S'),
    FieldDef::new("MY_COUNTRY", DataType::String).indicator('S'),
    FieldDef::new("MY_CQ_ZONE", DataType::PositiveInteger).check(zone_40),
    FieldDef::new("MY_DXCC", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::DXCC),
    FieldDef::new("MY_FISTS", DataType::PositiveInteger),
    FieldDef::new("MY_GRIDSQUARE", DataType::GridSquare).normalize_with(upper),
    FieldDef::new("MY_GRIDSQUARE_EXT", DataType::GridSquareExt).normalize_with(upper),
    FieldDef::new("MY_IOTA", DataType::IotaRef),
    FieldDef::new("MY_IOTA_ISLAND_ID", DataType::PositiveInteger).check(island_id),
    FieldDef::new("MY_ITU_ZONE", DataType::PositiveInteger).check(zone_90),
    FieldDef::new("MY_LAT", DataType::Location).indicator('L').normalize_with(upper),
    FieldDef::new("MY_LON", DataType::Location).indicator('L').normalize_with(upper),
    FieldDef::new("MY_NAME", DataType::String).indicator('S'),
    FieldDef::new("MY_POSTAL_CODE", DataType::String).indicator('S'),
    FieldDef::new("MY_POTA_REF", DataType::PotaRefList),
    FieldDef::new("MY_RIG", DataType::String).indicator('S'),
    FieldDef::new("MY_SIG", DataType::String).indicator('S'),
    FieldDef::new("MY_SIG_INFO", DataType::String).indicator('S'),
    FieldDef::new("MY_SOTA_REF", DataType::SotaRef),
    FieldDef::new("MY_STATE", DataType::String),
    FieldDef::new("MY_STREET", DataType::String).indicator('S'),
    FieldDef::new("MY_USACA_COUNTIES", DataType::String),
    FieldDef::new("MY_VUCC_GRIDS", DataType::GridSquareList)
        .check(vucc_grids)
        .normalize_with(upper),
    FieldDef::new("MY_WWFF_REF", DataType::WwffRef),
    FieldDef::new("NAME", DataType::String).indicator('S'),
    FieldDef::new("NOTES", DataType::MultilineString).indicator('M'),
    FieldDef::new("NR_BURSTS", DataType::Integer).check(non_negative_int),
    FieldDef::new("NR_PINGS", DataType::Integer).check(non_negative_int),
    FieldDef::new("OPERATOR", DataType::String).indicator('S').normalize_with(upper),
    FieldDef::new("OWNER_CALLSIGN", DataType::String).indicator('S').normalize_with(upper),
    FieldDef::new("PFX", DataType::String).indicator('S'),
    FieldDef::new("POTA_REF", DataType::PotaRefList),
    FieldDef::new("PRECEDENCE", DataType::String).indicator('S'),
    FieldDef::new("PROP_MODE", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::PROPAGATION_MODE)
        .normalize_with(upper),
    FieldDef::new("PUBLIC_KEY", DataType::String).indicator('S'),
    FieldDef::new("QRZCOM_QSO_UPLOAD_DATE", DataType::Date).indicator('D'),
    FieldDef::new("QRZCOM_QSO_UPLOAD_STATUS", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_UPLOAD_STATUS),
    FieldDef::new("QSLMSG", DataType::MultilineString).indicator('M'),
    FieldDef::new("QSLRDATE", DataType::Date).indicator('D'),
    FieldDef::new("QSLSDATE", DataType::Date).indicator('D'),
    FieldDef::new("QSL_RCVD", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_RCVD)
        .normalize_with(upper),
    FieldDef::new("QSL_RCVD_VIA", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_VIA)
        .normalize_with(upper),
    FieldDef::new("QSL_SENT", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_SENT)
        .normalize_with(upper),
    FieldDef::new("QSL_SENT_VIA", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_VIA)
        .normalize_with(upper),
    FieldDef::new("QSL_VIA", DataType::String).indicator('S'),
    FieldDef::new("QSO_COMPLETE", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::QSL_COMPLETE)
        .normalize_with(upper),
    FieldDef::new("QSO_DATE", DataType::Date).indicator('D'),
    FieldDef::new("QSO_DATE_OFF", DataType::Date).indicator('D'),
    FieldDef::new("QSO_RANDOM", DataType::Boolean).indicator('B'),
    FieldDef::new("QTH", DataType::String).indicator('S'),
    FieldDef::new("REGION", DataType::Enumeration)
        .indicator('E')
        .member_of(&enums::REGION)
        .normalize_with(upper),
    FieldDef::new("RIG", DataType::MultilineString).indicator('M'),
    FieldDef::new("RST_RCVD", DataType::String).indicator('S'),
    FieldDef::new("RST_SENT", DataType::String).indicator('S'),
    FieldDef::new("RX_PWR", DataType::Number).indicator('N').check(non_negative),
    FieldDef::new("SAT_MODE", DataType::String).indicator('S'),
    FieldDef::new("SAT_NAME", DataType::String).indicator('S'),
    FieldDef::new("SFI", DataType::Integer).check(sfi_range),
    FieldDef::new("SIG", DataType::String).indicator('S'),
    FieldDef::new("SIG_INFO", DataType::String).indicator('S'),
    FieldDef::new("SILENT_KEY", DataType::Boolean).indicator('B'),
    FieldDef::new("SKCC", DataType::String).indicator('S'),
    FieldDef::new("SOTA_REF", DataType::SotaRef),
    FieldDef::new("SRX", DataType::Integer).check(non_negative_int),
    FieldDef::new("SRX_STRING", DataType::String).indicator('S'),
    FieldDef::new("STATE", DataType::String),
    FieldDef::new("STATION_CALLSIGN", DataType::String).indicator('S').normalize_with(upper),
    FieldDef::new("STX", DataType::Integer).check(non_negative_int),
    FieldDef::new("STX_STRING", DataType::String).indicator('S'),
    FieldDef::new("SUBMODE", DataType::String).indicator('S'),
    FieldDef::new("SWL", DataType::Boolean).indicator('B'),
    FieldDef::new("TEN_TEN", DataType::PositiveInteger),
    FieldDef::new("TIME_OFF", DataType::Time).indicator('T'),
    FieldDef::new("TIME_ON", DataType::Time).indicator('T'),
    FieldDef::new("TX_PWR", DataType::Number).indicator('N').check(non_negative),
    FieldDef::new("UKSMG", DataType::PositiveInteger),
    FieldDef::new("USACA_COUNTIES", DataType::String),
    FieldDef::new("VUCC_GRIDS", DataType::GridSquareList)
        .check(vucc_grids)
        .normalize_with(upper),
    FieldDef::new("WEB", DataType::String).indicator('S'),
    FieldDef::new("WWFF_REF", DataType::WwffRef),
];
