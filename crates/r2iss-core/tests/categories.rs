use r2iss_core::error::CoreError;
use r2iss_core::models::category::Category;
use r2iss_core::models::inputs::{AlbuminBand, B2mBand, ClinicalInputs, CytogeneticFlags, LdhBand};
use r2iss_core::models::stage::{IssStage, RiskStage};

#[test]
fn display_labels_parse_to_their_band() {
    assert_eq!("< 3.5 mg/L".parse::<B2mBand>().unwrap(), B2mBand::Below3_5);
    assert_eq!(
        "3.5 - 5.5 mg/L".parse::<B2mBand>().unwrap(),
        B2mBand::From3_5To5_5
    );
    assert_eq!("≥ 5.5 mg/L".parse::<B2mBand>().unwrap(), B2mBand::AtLeast5_5);
    assert_eq!("< 3.5 g/dL".parse::<AlbuminBand>().unwrap(), AlbuminBand::Below3_5);
    assert_eq!(
        "Significantly Elevated (> 300 U/L)".parse::<LdhBand>().unwrap(),
        LdhBand::SignificantlyElevated
    );
}

#[test]
fn codes_and_short_forms_are_accepted() {
    assert_eq!("from_3_5_to_5_5".parse::<B2mBand>().unwrap(), B2mBand::From3_5To5_5);
    assert_eq!("3.5–5.5".parse::<B2mBand>().unwrap(), B2mBand::From3_5To5_5);
    assert_eq!("≥3.5".parse::<AlbuminBand>().unwrap(), AlbuminBand::AtLeast3_5);
    assert_eq!(" normal ".parse::<LdhBand>().unwrap(), LdhBand::Normal);
}

#[test]
fn every_band_round_trips_through_code_and_label() {
    for band in B2mBand::all() {
        assert_eq!(B2mBand::parse_category(band.code()).unwrap(), *band);
        assert_eq!(B2mBand::parse_category(band.label()).unwrap(), *band);
    }
    for band in AlbuminBand::all() {
        assert_eq!(AlbuminBand::parse_category(band.code()).unwrap(), *band);
        assert_eq!(AlbuminBand::parse_category(band.label()).unwrap(), *band);
    }
    for band in LdhBand::all() {
        assert_eq!(LdhBand::parse_category(band.code()).unwrap(), *band);
        assert_eq!(LdhBand::parse_category(band.label()).unwrap(), *band);
    }
}

#[test]
fn unknown_category_is_rejected_with_field_name() {
    let err = "4.0 mg/L".parse::<B2mBand>().unwrap_err();
    assert_eq!(
        err,
        CoreError::UnrecognizedCategory {
            field: "b2m",
            value: "4.0 mg/L".to_string(),
        }
    );
    assert_eq!(err.to_string(), "unrecognized b2m category: '4.0 mg/L'");

    assert!(matches!(
        "high".parse::<LdhBand>(),
        Err(CoreError::UnrecognizedCategory { field: "ldh", .. })
    ));
    assert!(matches!(
        "".parse::<AlbuminBand>(),
        Err(CoreError::UnrecognizedCategory { field: "albumin", .. })
    ));
}

#[test]
fn only_normal_ldh_is_not_elevated() {
    assert!(!LdhBand::Normal.is_elevated());
    assert!(LdhBand::Elevated.is_elevated());
    assert!(LdhBand::SignificantlyElevated.is_elevated());
}

#[test]
fn inputs_deserialize_with_default_flags() {
    let inputs: ClinicalInputs = serde_json::from_str(
        r#"{"b2m": "at_least_5_5", "albumin": "< 3.5 g/dL", "ldh": "elevated", "t414": true}"#,
    )
    .unwrap();

    assert_eq!(inputs.b2m, B2mBand::AtLeast5_5);
    assert_eq!(inputs.albumin, AlbuminBand::Below3_5);
    assert_eq!(inputs.ldh, LdhBand::Elevated);
    assert_eq!(
        inputs.cytogenetics,
        CytogeneticFlags {
            del17p: false,
            t414: true,
            gain1q: false,
        }
    );
}

#[test]
fn inputs_with_unknown_band_fail_to_deserialize() {
    let err = serde_json::from_str::<ClinicalInputs>(
        r#"{"b2m": "very high", "albumin": "at_least_3_5", "ldh": "normal"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("unrecognized b2m category"));
}

#[test]
fn inputs_serialize_as_codes_with_flat_flags() {
    let inputs = ClinicalInputs {
        b2m: B2mBand::Below3_5,
        albumin: AlbuminBand::AtLeast3_5,
        ldh: LdhBand::SignificantlyElevated,
        cytogenetics: CytogeneticFlags {
            del17p: true,
            ..Default::default()
        },
    };

    let value = serde_json::to_value(inputs).unwrap();
    assert_eq!(value["b2m"], "below_3_5");
    assert_eq!(value["albumin"], "at_least_3_5");
    assert_eq!(value["ldh"], "significantly_elevated");
    assert_eq!(value["del17p"], true);
    assert_eq!(value["gain1q"], false);
}

#[test]
fn stages_serialize_as_labels() {
    assert_eq!(serde_json::to_value(IssStage::II).unwrap(), "II");
    assert_eq!(
        serde_json::to_value(RiskStage::III).unwrap(),
        "R2-ISS III (Intermediate-High Risk)"
    );
    for stage in RiskStage::ALL {
        assert_eq!(serde_json::to_value(stage).unwrap(), stage.label());
        assert!(stage.label().starts_with(stage.short_label()));
        assert!(stage.label().contains(stage.risk()));
    }
}
