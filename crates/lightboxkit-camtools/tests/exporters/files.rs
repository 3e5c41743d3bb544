//! Writing a rendered box in every output format

use lightboxkit_camtools::{
    export_sheet, write_file, ExportError, ExportOptions, NightLightBox, NightLightBoxParameters,
    OutputFormat, ToolkitSettings,
};
use lightboxkit_core::Sheet;
use tempfile::tempdir;

fn rendered() -> (Sheet, Vec<String>) {
    let mut generator = NightLightBox::new(
        NightLightBoxParameters::default(),
        ToolkitSettings::default(),
    )
    .unwrap();
    let description = generator.description();
    let sheet = generator.render().unwrap().clone();
    (sheet, description)
}

#[test]
fn test_write_every_format() {
    let (sheet, description) = rendered();
    let dir = tempdir().unwrap();

    for format in [OutputFormat::Svg, OutputFormat::Gcode, OutputFormat::Dxf] {
        let path = dir.path().join(format!("night_light.{}", format.extension()));
        let options = ExportOptions {
            format,
            burn: 0.1,
            description: description.clone(),
            ..Default::default()
        };
        write_file(&sheet, &options, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.is_empty());
        match format {
            OutputFormat::Svg => assert_eq!(content.matches("<g id=").count(), sheet.len()),
            OutputFormat::Gcode => {
                assert!(content.contains("; Box style: large face"));
                assert_eq!(content.matches("; Part ").count(), sheet.len());
            }
            OutputFormat::Dxf => assert!(content.contains("CUT")),
        }
    }
}

#[test]
fn test_svg_with_labels() {
    let (sheet, _) = rendered();
    let mut options = ExportOptions::default();
    options.svg.labels = true;
    let svg = export_sheet(&sheet, &options).unwrap();
    assert!(svg.contains("Insert cut and"));
    assert!(svg.contains("engraved art here"));
    assert!(svg.contains(">lid top<"));
}

#[test]
fn test_empty_sheet_is_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let result = write_file(&Sheet::new(), &ExportOptions::default(), &path);
    assert!(matches!(result, Err(ExportError::EmptySheet(_))));
    assert!(!path.exists());
}

#[test]
fn test_write_to_missing_directory_fails() {
    let (sheet, _) = rendered();
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("box.svg");
    let result = write_file(&sheet, &ExportOptions::default(), &path);
    assert!(matches!(result, Err(ExportError::IoError(_))));
}
