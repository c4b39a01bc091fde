use adiflog::GridError;
use adiflog::grid::{self, Coordinates};

fn close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn four_character_locators_decode_to_square_centers() {
    let Coordinates { lat, lon } = grid::decode("FN42").unwrap();
    close(lat, 42.5);
    close(lon, -71.0);

    let Coordinates { lat, lon } = grid::decode("EM79").unwrap();
    close(lat, 39.5);
    close(lon, -85.0);
}

#[test]
fn two_character_locators_decode_to_field_centers() {
    let Coordinates { lat, lon } = grid::decode("FN").unwrap();
    close(lat, 45.0);
    close(lon, -70.0);
}

#[test]
fn six_character_locators_decode_to_subsquare_centers() {
    let Coordinates { lat, lon } = grid::decode("FN42ab").unwrap();
    close(lat, 42.0625);
    close(lon, -71.95833333333333);

    // First subsquare of the first square of the first field.
    let Coordinates { lat, lon } = grid::decode("AA00AA").unwrap();
    close(lat, -89.97916666666667);
    close(lon, -179.95833333333334);
}

#[test]
fn letters_are_case_insensitive() {
    assert_eq!(grid::decode("fn42").unwrap(), grid::decode("FN42").unwrap());
    assert_eq!(
        grid::decode("jn58TD").unwrap(),
        grid::decode("JN58td").unwrap()
    );
}

#[test]
fn distance_matches_independent_great_circle_values() {
    // Newington CT to Cincinnati OH, locator centers.
    let km = grid::distance("FN42", "EM79").unwrap();
    assert!((km - 1219.6835743024722).abs() < 1e-6, "got {km}");

    // Munich to mid-Connecticut, subsquare centers.
    let km = grid::distance("JN58td", "FN31pr").unwrap();
    assert!((km - 6335.789602551533).abs() < 1e-6, "got {km}");
}

#[test]
fn distance_to_self_is_zero() {
    for locator in ["AA", "FN42", "JN58td", "RR99xx"] {
        let km = grid::distance(locator, locator).unwrap();
        assert!(km.abs() < 1e-12, "{locator}: got {km}");
    }
}

#[test]
fn distance_is_symmetric() {
    let ab = grid::distance("FN42", "EM79").unwrap();
    let ba = grid::distance("EM79", "FN42").unwrap();
    close(ab, ba);
}

#[test]
fn bad_lengths_are_rejected() {
    assert_eq!(grid::decode(""), Err(GridError::BadLength(0)));
    assert_eq!(grid::decode("FN4"), Err(GridError::BadLength(3)));
    assert_eq!(grid::decode("FN42abcd"), Err(GridError::BadLength(8)));
}

#[test]
fn out_of_alphabet_characters_are_rejected() {
    // Field letters stop at R.
    assert_eq!(
        grid::decode("ZZ"),
        Err(GridError::BadChar { index: 0, ch: 'Z' })
    );
    // Square positions must be digits.
    assert_eq!(
        grid::decode("FNxy"),
        Err(GridError::BadChar { index: 2, ch: 'x' })
    );
    // Subsquare letters stop at X.
    assert_eq!(
        grid::decode("FN42zz"),
        Err(GridError::BadChar { index: 4, ch: 'z' })
    );
}
