//! YAML shade profiles: base color, shading parameters, slot names.

pub mod schema;

use anyhow::{Context, Result};
use schema::ShadeProfile;

pub fn load_from_yaml_str(s: &str) -> Result<ShadeProfile> {
    let profile: ShadeProfile = serde_yaml::from_str(s)?;
    profile
        .shading
        .validate()
        .with_context(|| format!("profile '{}' has invalid shading", profile.id))?;
    Ok(profile)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<ShadeProfile> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    load_from_yaml_str(&data).with_context(|| format!("loading profile {}", path.display()))
}

pub fn to_yaml_string(profile: &ShadeProfile) -> Result<String> {
    Ok(serde_yaml::to_string(profile)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::SlotNames;
    use crate::color::Color;
    use crate::shade::ShadeParameters;
    use pretty_assertions::assert_eq;
    use super::schema::{SlotPreset, SlotPresetName};

    #[test]
    fn test_minimal_profile_uses_defaults() {
        let p = load_from_yaml_str("id: hero\nbase_color: \"#FF8000\"\n").unwrap();
        assert_eq!(p.id, "hero");
        assert_eq!(p.base_color, Color::from_hex("#FF8000").unwrap());
        assert!(!p.preview);
        assert_eq!(p.shading, ShadeParameters::default());
        assert_eq!(p.settings().slots, SlotNames::default());
    }

    #[test]
    fn test_partial_shading_block() {
        let yaml = "id: a\nbase_color: \"#000000\"\nshading:\n  value_delta: 35\n";
        let p = load_from_yaml_str(yaml).unwrap();
        assert_eq!(p.shading, ShadeParameters { hue_shift_degrees: 5, saturation_delta: 20, value_delta: 35 });
    }

    #[test]
    fn test_slot_presets() {
        let unity = load_from_yaml_str("id: u\nbase_color: \"#FFFFFF\"\nslots: unity\n").unwrap();
        assert_eq!(unity.slots, SlotPreset::Named(SlotPresetName::Unity));
        assert_eq!(unity.settings().slots, SlotNames::unity_toon_shader());

        let yaml = "id: c\nbase_color: \"#FFFFFF\"\nslots:\n  base: uBase\n  first_shade: uShade1\n  second_shade: uShade2\n";
        let custom = load_from_yaml_str(yaml).unwrap();
        assert_eq!(custom.settings().slots.first_shade, "uShade1");
    }

    #[test]
    fn test_rejects_out_of_range_shading() {
        let yaml = "id: bad\nbase_color: \"#FFFFFF\"\nshading:\n  hue_shift_degrees: 400\n";
        let err = load_from_yaml_str(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("hue_shift_degrees"));
    }

    #[test]
    fn test_rejects_bad_color() {
        assert!(load_from_yaml_str("id: x\nbase_color: \"#nothex\"\n").is_err());
    }

    #[test]
    fn test_yaml_round_trip_keeps_profile() {
        let p = load_from_yaml_str("id: rt\nbase_color: \"#4FA34F\"\npreview: true\nslots: unity\n").unwrap();
        let again = load_from_yaml_str(&to_yaml_string(&p).unwrap()).unwrap();
        assert_eq!(again, p);
    }
}
