use super::*;

#[test]
fn defaults_are_the_calibrated_constants() {
    let s = PressureSettings::default();
    assert_eq!(s.luma_threshold, 220.0);
    assert_eq!(s.alpha_threshold, 220);
    assert_eq!(s.sigmoid_steepness, 12.0);
    assert_eq!(s.sigmoid_midpoint, 0.5);
    assert_eq!(s.dilation_radius, 5);
    assert_eq!(s.blur_sigma, 3.0);
    assert_eq!(s.blur_passes, 3);
    assert_eq!(s.contrast_exponent, 0.8);
    s.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let s = PressureSettings::from_json_str(r#"{ "contrast_exponent": 1.0, "blur_passes": 1 }"#)
        .unwrap();
    assert_eq!(s.contrast_exponent, 1.0);
    assert_eq!(s.blur_passes, 1);
    assert_eq!(s.blur_sigma, 3.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = PressureSettings::from_json_str(r#"{ "blur_radius": 4 }"#).unwrap_err();
    assert!(matches!(err, FootprintError::Serde(_)));
}

#[test]
fn invalid_values_fail_validation() {
    let err = PressureSettings::from_json_str(r#"{ "blur_sigma": 0.0 }"#).unwrap_err();
    assert!(matches!(err, FootprintError::Validation(_)));

    let bad = PressureSettings {
        contrast_exponent: f64::NAN,
        ..PressureSettings::default()
    };
    assert!(bad.validate().is_err());

    let bad = PressureSettings {
        sigmoid_midpoint: 1.5,
        ..PressureSettings::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn serde_roundtrip_preserves_settings() {
    let s = PressureSettings {
        dilation_radius: 3,
        sigmoid_steepness: 10.0,
        ..PressureSettings::default()
    };
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(PressureSettings::from_json_str(&json).unwrap(), s);
}

#[test]
fn missing_settings_file_is_reported() {
    let err = PressureSettings::from_path(Path::new("target/does-not-exist/settings.json"))
        .unwrap_err();
    assert!(err.to_string().contains("read pressure settings"));
}
