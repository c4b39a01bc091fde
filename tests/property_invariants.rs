use proptest::prelude::*;

use adiflog::parser::{self, AdifEvent};
use adiflog::schema::{HEADER_DEFS, QSO_DEFS};
use adiflog::{Field, QsoRecord, grid};

fn normalizer_input() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain text, including things no normalizer can parse as numbers.
        "[ -~]{0,12}",
        // Numbers well outside every folding interval.
        (-2000.0f64..2000.0).prop_map(|n| format!("{n}")),
        (-2000i32..2000).prop_map(|n| format!("{n}")),
    ]
}

fn locator() -> impl Strategy<Value = String> {
    (
        "[A-Ra-r]{2}",
        prop::option::of(("[0-9]{2}", prop::option::of("[A-Xa-x]{2}"))),
    )
        .prop_map(|(field, rest)| {
            let mut loc = field;
            if let Some((square, sub)) = rest {
                loc.push_str(&square);
                if let Some(sub) = sub {
                    loc.push_str(&sub);
                }
            }
            loc
        })
}

proptest! {
    #[test]
    fn every_normalizer_is_idempotent(value in normalizer_input()) {
        for def in HEADER_DEFS.iter().chain(QSO_DEFS.iter()) {
            if !def.has_normalizer() {
                continue;
            }
            let once = def.normalize(&value);
            let twice = def.normalize(&once);
            prop_assert_eq!(&once, &twice, "normalizer for {} not idempotent", def.name());
        }
    }

    #[test]
    fn tags_round_trip_through_the_tokenizer(
        name in "[A-Z][A-Z0-9_]{0,10}",
        data in "[ -~]{0,40}",
    ) {
        let wire = Field::tag(&name, None, &data);
        let field = Field::parse(&wire).unwrap();

        prop_assert_eq!(field.name(), name.as_str());
        prop_assert_eq!(field.data(), Some(data.as_str()));
        prop_assert_eq!(field.bytes_consumed(), wire.len());
    }

    #[test]
    fn valid_records_survive_serialize_then_parse(
        call in "[A-Z][A-Z0-9]{2,5}",
        day in 1u32..28,
        hour in 0u32..24,
        minute in 0u32..60,
        band_idx in 0usize..5,
    ) {
        let band = ["160m", "80m", "40m", "20m", "10m"][band_idx];
        let date = format!("202306{day:02}");
        let time = format!("{hour:02}{minute:02}");

        let qso = QsoRecord::from_fields([
            ("QSO_DATE", date.as_str()),
            ("TIME_ON", time.as_str()),
            ("CALL", call.as_str()),
            ("BAND", band),
            ("MODE", "CW"),
        ]).unwrap();

        let events = parser::collect(&qso.stringify()).unwrap();
        let reparsed: Vec<&QsoRecord> = events.iter().filter_map(|e| match e {
            AdifEvent::Qso(q) => Some(q),
            _ => None,
        }).collect();

        prop_assert_eq!(reparsed, vec![&qso]);
    }

    #[test]
    fn locator_distance_to_self_is_zero(loc in locator()) {
        let km = grid::distance(&loc, &loc).unwrap();
        prop_assert!(km.abs() < 1e-12, "{}: got {}", loc, km);
    }

    #[test]
    fn locator_distance_is_symmetric(a in locator(), b in locator()) {
        let ab = grid::distance(&a, &b).unwrap();
        let ba = grid::distance(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-9);
    }
}
