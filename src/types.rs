//! Primitive ADIF data types and their stateless predicates.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| re(r"^[0-9]{8}$"));
static TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| re(r"^([0-9]{4}|[0-9]{6})$"));
static LOCATION_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| re(r"^[NSEW][0-9]{3} [0-9]{2}\.[0-9]{3}$"));
static GRID_SQUARE: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)^[A-R]{2}([0-9]{2}([A-X]{2}([0-9]{2})?)?)?$"));
static GRID_SQUARE_EXT: LazyLock<Regex> = LazyLock::new(|| re(r"^[A-X]{2}([0-9]{2})?$"));
static SPONSORED_AWARD: LazyLock<Regex> =
    LazyLock::new(|| re(r"^(ADIF_|ARI_|ARRL_|CQ_|DARC_|EQSL_|IARU_|JARL_|RSGB_|TAG_|WABAG_)"));
static POTA_REF: LazyLock<Regex> =
    LazyLock::new(|| re(r"^[0-9A-Z]{1,4}-[0-9A-Z]{4,5}(@[0-9A-Z-]{4,6})?$"));
static SOTA_REF: LazyLock<Regex> = LazyLock::new(|| re(r"^[0-9A-Z/-]+$"));
static WWFF_REF: LazyLock<Regex> = LazyLock::new(|| re(r"^[0-9A-Z]{1,4}[0-9A-Z]{2}-[0-9]{4}$"));
static IOTA_REF: LazyLock<Regex> = LazyLock::new(|| re(r"^(NA|SA|EU|AF|OC|AS|AN)-[0-9]{3}$"));
static UUID: LazyLock<Regex> = LazyLock::new(|| {
    re(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
});

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static primitive-type pattern")
}

/// Primitive type tag carried by every field descriptor.
///
/// Predicates are pure and stateless; enumeration membership is checked by
/// the schema catalog against a named table, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Single character, one of `Y`/`y`/`N`/`n`.
    Boolean,
    /// One printable ASCII character (code point 32–126).
    Character,
    /// One ASCII digit.
    Digit,
    /// Printable ASCII text.
    String,
    /// Printable ASCII text plus CR/LF.
    MultilineString,
    /// Optional leading `-`, digits, at most one `.` separator.
    Number,
    /// Optional leading `-` then digits only.
    Integer,
    /// Integer with parsed value > 0.
    PositiveInteger,
    /// `YYYYMMDD`, year ≥ 1930, a real calendar date.
    Date,
    /// `HHMM` or `HHMMSS`, range-checked.
    Time,
    /// `[NSEW]DDD MM.MMM`, degrees ≤ 180, minutes ≤ 59.
    Location,
    /// Maidenhead locator, 2/4/6/8 characters, case-insensitive letters.
    GridSquare,
    /// Extended locator suffix, 2 letters A–X plus optional 2 digits.
    GridSquareExt,
    /// Comma-separated [`DataType::GridSquare`] values.
    GridSquareList,
    /// Award reference with a recognized sponsor prefix.
    SponsoredAward,
    /// Comma-separated [`DataType::SponsoredAward`] values.
    SponsoredAwardList,
    /// Parks-on-the-Air reference.
    PotaRef,
    /// Comma-separated [`DataType::PotaRef`] values.
    PotaRefList,
    /// Summits-on-the-Air reference.
    SotaRef,
    /// World-Wide-Flora-Fauna reference.
    WwffRef,
    /// Islands-on-the-Air reference.
    IotaRef,
    /// Award-credit list; structure is enforced by a per-field check.
    CreditList,
    /// Hex UUID in 8-4-4-4-12 form.
    Uuid,
    /// Any non-empty string; membership is the catalog's concern.
    Enumeration,
}

impl DataType {
    /// Returns true when `s` is lexically valid for this primitive type.
    pub fn check(self, s: &str) -> bool {
        match self {
            Self::Boolean => matches!(s, "Y" | "y" | "N" | "n"),
            Self::Character => one_char(s, is_printable),
            Self::Digit => one_char(s, |c| c.is_ascii_digit()),
            Self::String => s.chars().all(is_printable),
            Self::MultilineString => s.chars().all(|c| is_printable(c) || c == '\r' || c == '\n'),
            Self::Number => !s.is_empty() && check_number(s),
            Self::Integer => !s.is_empty() && check_integer(s),
            Self::PositiveInteger => {
                !s.is_empty() && check_integer(s) && s.parse::<i64>().is_ok_and(|n| n > 0)
            }
            Self::Date => DATE_SHAPE.is_match(s) && check_date(s),
            Self::Time => TIME_SHAPE.is_match(s) && check_time(s),
            Self::Location => LOCATION_SHAPE.is_match(s) && check_location(s),
            Self::GridSquare => GRID_SQUARE.is_match(s),
            Self::GridSquareExt => GRID_SQUARE_EXT.is_match(s),
            Self::GridSquareList => each(s, Self::GridSquare),
            Self::SponsoredAward => SPONSORED_AWARD.is_match(s),
            Self::SponsoredAwardList => each(s, Self::SponsoredAward),
            Self::PotaRef => POTA_REF.is_match(s),
            Self::PotaRefList => each(s, Self::PotaRef),
            Self::SotaRef => SOTA_REF.is_match(s),
            Self::WwffRef => WWFF_REF.is_match(s),
            Self::IotaRef => IOTA_REF.is_match(s),
            Self::CreditList => true,
            Self::Uuid => UUID.is_match(s),
            Self::Enumeration => !s.is_empty(),
        }
    }
}

fn one_char(s: &str, pred: impl Fn(char) -> bool) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if pred(c))
}

fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

fn each(s: &str, ty: DataType) -> bool {
    s.split(',').all(|part| ty.check(part))
}

fn check_number(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let mut parts = s.split('.');
    let digits = parts.next().unwrap_or("");
    let decimal = parts.next().unwrap_or("");
    digits.chars().all(|c| c.is_ascii_digit())
        && decimal.chars().all(|c| c.is_ascii_digit())
        && parts.next().is_none()
}

fn check_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    s.chars().all(|c| c.is_ascii_digit())
}

/// Month/day must form a real calendar date; no rollover (Feb 30 is not
/// silently turned into Mar 2), and the year floor is 1930.
fn check_date(s: &str) -> bool {
    let (Ok(year), Ok(month), Ok(day)) = (
        s[0..4].parse::<i32>(),
        s[4..6].parse::<u32>(),
        s[6..8].parse::<u32>(),
    ) else {
        return false;
    };

    year >= 1930 && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

fn check_time(s: &str) -> bool {
    // Normalize 4-digit times to 6 by appending seconds.
    let full = if s.len() == 4 {
        format!("{s}00")
    } else {
        s.to_string()
    };

    let (Ok(hour), Ok(minute), Ok(second)) = (
        full[0..2].parse::<u32>(),
        full[2..4].parse::<u32>(),
        full[4..6].parse::<u32>(),
    ) else {
        return false;
    };

    hour <= 23 && minute <= 59 && second <= 59
}

fn check_location(s: &str) -> bool {
    let degrees: u32 = match s[1..4].parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    let minutes: u32 = match s[5..7].parse() {
        Ok(m) => m,
        Err(_) => return false,
    };

    degrees <= 180 && minutes <= 59
}
