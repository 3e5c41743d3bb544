//! Kerf compensation on generated parts

use lightboxkit_camtools::{
    compensate_sheet, NightLightBox, NightLightBoxParameters, ToolkitSettings,
};

#[test]
fn test_compensated_parts_grow_by_the_burn() {
    let mut generator = NightLightBox::new(
        NightLightBoxParameters::default(),
        ToolkitSettings::default(),
    )
    .unwrap();
    let nominal = generator.render().unwrap().clone();
    let compensated = compensate_sheet(&nominal, 0.2);
    assert_eq!(compensated.len(), nominal.len());

    for (before, after) in nominal.iter().zip(compensated.iter()) {
        assert_eq!(before.label, after.label);
        let a = before.outline().unwrap().bounding_box();
        let b = after.outline().unwrap().bounding_box();
        assert!(
            (b.width() - a.width() - 0.2).abs() < 1e-3,
            "outline of '{}' did not grow",
            before.label
        );
        assert_eq!(before.holes().count(), after.holes().count());
        assert!(after.validate().is_ok());
    }
}

#[test]
fn test_wood_plate_annotation_untouched() {
    let mut generator = NightLightBox::new(
        NightLightBoxParameters::default(),
        ToolkitSettings::default(),
    )
    .unwrap();
    let nominal = generator.render().unwrap().clone();
    let compensated = compensate_sheet(&nominal, 0.2);
    let plate = nominal.parts.last().unwrap();
    let plate_after = compensated.parts.last().unwrap();
    assert_eq!(
        plate.annotations().next().unwrap(),
        plate_after.annotations().next().unwrap()
    );
}
