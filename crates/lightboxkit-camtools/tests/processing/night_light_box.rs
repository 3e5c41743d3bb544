//! Generated night light boxes across styles and options

use lightboxkit_camtools::{
    BoxStyle, NightLightBox, NightLightBoxParameters, ToolkitSettings, WOOD_PLATE_LABEL,
};
use lightboxkit_core::Sheet;

fn render(params: NightLightBoxParameters) -> Sheet {
    let mut generator =
        NightLightBox::new(params, ToolkitSettings::default()).expect("valid parameters");
    generator.render().expect("render").clone()
}

#[test]
fn test_every_variant_renders_valid_parts() {
    for style in BoxStyle::ALL {
        for hooks in [false, true] {
            for screw in [0.0, 3.0] {
                let sheet = render(NightLightBoxParameters {
                    box_style: style,
                    hooks,
                    lock_screw_diameter: screw,
                    ..Default::default()
                });
                for part in sheet.iter() {
                    assert!(
                        part.validate().is_ok(),
                        "{} / hooks {} / screw {}: part '{}' is invalid",
                        style,
                        hooks,
                        screw,
                        part.label
                    );
                }
            }
        }
    }
}

#[test]
fn test_render_order_and_labels() {
    let sheet = render(NightLightBoxParameters::default());
    let labels: Vec<&str> = sheet.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "left",
            "right",
            "rail",
            "rail",
            "bottom",
            "back",
            "front",
            "elec. comp.",
            "lid top",
            "Diffuser",
            WOOD_PLATE_LABEL,
            WOOD_PLATE_LABEL,
            WOOD_PLATE_LABEL,
        ]
    );
}

#[test]
fn test_customizable_face_adds_face_and_pegs() {
    let sheet = render(NightLightBoxParameters {
        box_style: BoxStyle::ExtraCustomizableFace,
        ..Default::default()
    });
    assert_eq!(sheet.len(), 17);
    assert_eq!(sheet.parts[7].label, "customizable face");
    assert_eq!(sheet.iter().filter(|p| p.label == "peg").count(), 3);

    // face carries the window and three peg holes, the front the peg slots
    let face = sheet.find("customizable face").unwrap();
    assert_eq!(face.holes().count(), 4);
}

#[test]
fn test_wood_plate_count_follows_parameter() {
    for count in [1, 5] {
        let sheet = render(NightLightBoxParameters {
            wood_plates_count: count,
            ..Default::default()
        });
        let plates = sheet.iter().filter(|p| p.label == WOOD_PLATE_LABEL).count();
        assert_eq!(plates, count as usize);
    }
}

#[test]
fn test_sides_are_mirror_images() {
    let sheet = render(NightLightBoxParameters::default());
    let left = sheet.find("left").unwrap().bounding_box();
    let right = sheet.find("right").unwrap().bounding_box();
    assert!((left.width() - right.width()).abs() < 1e-6);
    assert!((left.height() - right.height()).abs() < 1e-6);
}

#[test]
fn test_parts_do_not_overlap_on_the_sheet() {
    let sheet = render(NightLightBoxParameters {
        box_style: BoxStyle::ExtraCustomizableFace,
        ..Default::default()
    });
    let boxes: Vec<_> = sheet.iter().map(|p| p.bounding_box()).collect();
    for (i, a) in boxes.iter().enumerate() {
        for b in boxes.iter().skip(i + 1) {
            let overlap_x = a.min_x < b.max_x - 1e-6 && b.min_x < a.max_x - 1e-6;
            let overlap_y = a.min_y < b.max_y - 1e-6 && b.min_y < a.max_y - 1e-6;
            assert!(!(overlap_x && overlap_y), "parts overlap: {:?} {:?}", a, b);
        }
    }
}

#[test]
fn test_back_extra_holes_follow_parameter() {
    let none = render(NightLightBoxParameters {
        back_extra_holes: String::new(),
        ..Default::default()
    });
    let default = render(NightLightBoxParameters::default());
    let holes = |sheet: &Sheet| sheet.find("back").unwrap().holes().count();
    assert_eq!(holes(&default), holes(&none) + 3);
}

#[test]
fn test_thicker_material() {
    let mut generator = NightLightBox::new(
        NightLightBoxParameters {
            background_depth: 50.0,
            ..Default::default()
        },
        ToolkitSettings::with_thickness(6.0),
    )
    .unwrap();
    let sheet = generator.render().unwrap();
    assert_eq!(sheet.len(), 13);
    assert!(sheet.iter().all(|p| p.validate().is_ok()));
}
