use std::io::Write;

use toonshade_core::preview::PreviewController;
use toonshade_core::{profile, MaterialColors, ShadeBinding};

const CLOTH: &str = r##"
id: hero_cloth
base_color: "#4FA34F"
preview: true
shading:
  hue_shift_degrees: 5
  saturation_delta: 20
  value_delta: 20
slots: unity
"##;

#[test]
fn profile_from_disk_drives_binding() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CLOTH.as_bytes()).unwrap();

    let p = profile::load_from_path(file.path()).unwrap();
    assert_eq!(p.id, "hero_cloth");

    let mut binding = ShadeBinding::with_surface(p.settings(), MaterialColors::new());
    let mut preview = PreviewController::new();
    if p.preview {
        preview.toggle(1);
    }
    let result = preview.tick(&mut binding).unwrap().expect("previewing");

    let mat = binding.surface().unwrap();
    assert_eq!(mat.get("_BaseColor"), Some(result.base));
    assert_eq!(mat.get("_1st_ShadeColor"), Some(result.first_shade));
    assert_eq!(mat.get("_2nd_ShadeColor"), Some(result.second_shade));
}

#[test]
fn missing_file_reports_path() {
    let err = profile::load_from_path("/definitely/not/here.yaml").unwrap_err();
    assert!(format!("{:#}", err).contains("not/here.yaml"));
}
