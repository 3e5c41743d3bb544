//! Parameter checks before any drawing happens

use lightboxkit_camtools::{
    CamToolError, NightLightBox, NightLightBoxParameters, ParameterError, ToolkitSettings,
};

fn new_box(params: NightLightBoxParameters) -> Result<NightLightBox, CamToolError> {
    NightLightBox::new(params, ToolkitSettings::default())
}

#[test]
fn test_margin_must_be_below_thickness() {
    let err = new_box(NightLightBoxParameters {
        margin: 3.0,
        ..Default::default()
    })
    .err()
    .unwrap();
    assert!(matches!(
        err,
        CamToolError::Parameter(ParameterError::OutOfRange { .. })
    ));
}

#[test]
fn test_background_must_hold_the_hinge() {
    let err = new_box(NightLightBoxParameters {
        background_depth: 10.0,
        ..Default::default()
    })
    .err()
    .unwrap();
    assert!(err.to_string().contains("background_depth"));
}

#[test]
fn test_bad_extra_hole_line_is_reported() {
    let err = new_box(NightLightBoxParameters {
        back_extra_holes: "R 20 10 11.5 8\nC 11.58 10".to_string(),
        ..Default::default()
    })
    .err()
    .unwrap();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_nut_must_be_wider_than_screw() {
    let err = new_box(NightLightBoxParameters {
        lock_screw_diameter: 4.0,
        lock_nut_width: 4.0,
        ..Default::default()
    })
    .err()
    .unwrap();
    assert!(matches!(
        err,
        CamToolError::Parameter(ParameterError::Incompatible(_))
    ));
}

#[test]
fn test_bad_material_settings() {
    let settings = ToolkitSettings {
        thickness: 0.0,
        ..Default::default()
    };
    assert!(NightLightBox::new(NightLightBoxParameters::default(), settings).is_err());
}
