use adiflog::{AdifError, HeaderRecord, QsoRecord};

fn minimal_qso() -> Vec<(&'static str, &'static str)> {
    vec![
        ("QSO_DATE", "20230615"),
        ("TIME_ON", "1234"),
        ("CALL", "W1AW"),
        ("BAND", "20m"),
        ("MODE", "CW"),
    ]
}

#[test]
fn header_builds_and_serializes_in_catalog_order() {
    let header = HeaderRecord::from_fields([
        ("PROGRAMID", "adiflog"),
        ("ADIF_VER", "3.1.4"),
        ("PROGRAMVERSION", "0.1.0"),
    ])
    .unwrap();

    assert_eq!(header.get("adif_ver"), Some("3.1.4"));
    assert_eq!(header.len(), 3);

    let wire = header.stringify_with_banner("test log");
    assert_eq!(
        wire,
        "test log\r\n\r\n<ADIF_VER:5:S>3.1.4\r\n<PROGRAMID:7:S>adiflog\r\n<PROGRAMVERSION:5:S>0.1.0\r\n<EOH>"
    );
}

#[test]
fn header_rejects_malformed_version() {
    let err = HeaderRecord::from_fields([("ADIF_VER", "3.14")]).unwrap_err();
    assert!(matches!(err, AdifError::Pattern { .. }));
    assert_eq!(err.field(), Some("ADIF_VER"));
    assert_eq!(err.value(), Some("3.14"));
}

#[test]
fn header_timestamp_halves_must_be_real_date_and_time() {
    assert!(HeaderRecord::from_fields([("CREATED_TIMESTAMP", "20230615 123456")]).is_ok());

    let err = HeaderRecord::from_fields([("CREATED_TIMESTAMP", "20230615 996100")]).unwrap_err();
    assert!(matches!(err, AdifError::Check { .. }));
}

#[test]
fn unknown_names_and_empty_values_are_skipped() {
    let header =
        HeaderRecord::from_fields([("NOT_A_FIELD", "x"), ("PROGRAMID", ""), ("ADIF_VER", "3.1.4")])
            .unwrap();
    assert_eq!(header.len(), 1);
    assert_eq!(header.get("PROGRAMID"), None);
}

#[test]
fn qso_requires_core_fields() {
    let err = QsoRecord::from_fields([("CALL", "W1AW"), ("MODE", "CW")]).unwrap_err();
    let AdifError::MissingRequired { missing } = &err else {
        panic!("expected missing-required error, got {err:?}");
    };
    assert_eq!(*missing, vec!["QSO_DATE", "TIME_ON", "BAND or FREQ"]);
}

#[test]
fn freq_satisfies_the_band_requirement() {
    let qso = QsoRecord::from_fields([
        ("QSO_DATE", "20230615"),
        ("TIME_ON", "1234"),
        ("CALL", "W1AW"),
        ("FREQ", "14.250"),
        ("MODE", "SSB"),
    ])
    .unwrap();
    assert_eq!(qso.get("FREQ"), Some("14.250"));
    assert_eq!(qso.get("BAND"), None);
}

#[test]
fn unknown_band_lists_every_accepted_key() {
    let mut fields = minimal_qso();
    fields[3] = ("BAND", "99m");

    let err = QsoRecord::from_fields(fields).unwrap_err();
    let AdifError::Enumeration { field, value, valid_values } = &err else {
        panic!("expected enumeration error, got {err:?}");
    };
    assert_eq!(field, "BAND");
    assert_eq!(value, "99m");
    assert!(valid_values.iter().any(|k| k == "20m"));
    assert!(valid_values.iter().any(|k| k == "160m"));
    assert!(!valid_values.iter().any(|k| k == "99m"));
}

#[test]
fn date_floor_and_calendar_are_enforced() {
    assert!(QsoRecord::from_fields(with_date("20230228")).is_ok());

    let err = QsoRecord::from_fields(with_date("20230230")).unwrap_err();
    assert!(matches!(err, AdifError::DataType { .. }));

    let err = QsoRecord::from_fields(with_date("19000101")).unwrap_err();
    assert!(matches!(err, AdifError::DataType { .. }));
}

fn with_date(date: &'static str) -> Vec<(&'static str, &'static str)> {
    let mut fields = minimal_qso();
    fields[0] = ("QSO_DATE", date);
    fields
}

#[test]
fn legacy_dstar_mode_becomes_digitalvoice_submode() {
    let mut fields = minimal_qso();
    fields[4] = ("MODE", "DSTAR");

    let qso = QsoRecord::from_fields(fields).unwrap();
    assert_eq!(qso.get("MODE"), Some("DIGITALVOICE"));
    assert_eq!(qso.get("SUBMODE"), Some("DSTAR"));
}

#[test]
fn normalizers_fold_case_and_angles() {
    let mut fields = minimal_qso();
    fields[2] = ("CALL", "w1aw");
    fields[3] = ("BAND", "20M");
    fields.push(("ANT_AZ", "370"));
    fields.push(("GRIDSQUARE", "fn42"));

    let qso = QsoRecord::from_fields(fields).unwrap();
    assert_eq!(qso.get("CALL"), Some("W1AW"));
    assert_eq!(qso.get("BAND"), Some("20m"));
    assert_eq!(qso.get("ANT_AZ"), Some("10"));
    assert_eq!(qso.get("GRIDSQUARE"), Some("FN42"));
}

#[test]
fn negative_azimuth_folds_up_from_360() {
    let mut fields = minimal_qso();
    fields.push(("ANT_AZ", "-45"));

    let qso = QsoRecord::from_fields(fields).unwrap();
    assert_eq!(qso.get("ANT_AZ"), Some("315"));
}

#[test]
fn elevation_fold_uses_modulus_90() {
    // -30 folds to 60 under the modulus-90 scheme.
    let mut fields = minimal_qso();
    fields.push(("ANT_EL", "-30"));

    let qso = QsoRecord::from_fields(fields).unwrap();
    assert_eq!(qso.get("ANT_EL"), Some("60"));
}

#[test]
fn duplicate_names_keep_the_last_value() {
    let mut fields = minimal_qso();
    fields.push(("CALL", "K1ABC"));

    let qso = QsoRecord::from_fields(fields).unwrap();
    assert_eq!(qso.get("CALL"), Some("K1ABC"));
}

#[test]
fn out_of_range_custom_checks_fail() {
    let mut fields = minimal_qso();
    fields.push(("AGE", "150"));

    let err = QsoRecord::from_fields(fields).unwrap_err();
    assert!(matches!(err, AdifError::Check { .. }));
    assert_eq!(err.field(), Some("AGE"));
}

#[test]
fn stringify_emits_catalog_order_with_terminator() {
    let qso = QsoRecord::from_fields([
        ("MODE", "CW"),
        ("CALL", "W1AW"),
        ("TIME_ON", "1234"),
        ("QSO_DATE", "20230615"),
        ("BAND", "20m"),
    ])
    .unwrap();

    assert_eq!(
        qso.stringify(),
        "<BAND:3:E>20m\r\n<CALL:4:S>W1AW\r\n<MODE:2:E>CW\r\n<QSO_DATE:8:D>20230615\r\n<TIME_ON:4:T>1234\r\n<EOR>"
    );
}

#[test]
fn to_object_snapshots_present_fields_only() {
    let qso = QsoRecord::from_fields(minimal_qso()).unwrap();
    let snapshot = qso.to_object();

    assert_eq!(snapshot.len(), 5);
    assert_eq!(snapshot.get("CALL").map(String::as_str), Some("W1AW"));
    assert!(!snapshot.contains_key("COMMENT"));

    let header = HeaderRecord::from_fields([("ADIF_VER", "3.1.4")]).unwrap();
    let snapshot = header.to_object();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("ADIF_VER").map(String::as_str), Some("3.1.4"));
}

#[test]
fn fields_iterates_in_catalog_order() {
    let qso = QsoRecord::from_fields(minimal_qso()).unwrap();
    let names: Vec<&str> = qso.fields().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["BAND", "CALL", "MODE", "QSO_DATE", "TIME_ON"]);
}

#[test]
fn section_membership_is_checked_against_the_arrl_table() {
    let mut fields = minimal_qso();
    fields.push(("ARRL_SECT", "not-a-section"));

    let err = QsoRecord::from_fields(fields).unwrap_err();
    let AdifError::Enumeration { field, valid_values, .. } = &err else {
        panic!("expected enumeration error, got {err:?}");
    };
    assert_eq!(field, "ARRL_SECT");
    assert!(valid_values.iter().any(|k| k == "WMA"));

    let mut fields = minimal_qso();
    fields.push(("ARRL_SECT", "wma"));
    let qso = QsoRecord::from_fields(fields).unwrap();
    assert_eq!(qso.get("ARRL_SECT"), Some("WMA"));
}

#[test]
fn records_serialize_as_maps() {
    let qso = QsoRecord::from_fields(minimal_qso()).unwrap();
    let json = serde_json::to_value(&qso).unwrap();
    assert_eq!(json["CALL"], "W1AW");
    assert_eq!(json["BAND"], "20m");
}
