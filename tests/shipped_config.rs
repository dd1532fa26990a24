use pitchcast::config::AppConfig;
use pitchcast::domain::{PitchCategory, PitchMap};
use std::path::Path;

#[test]
fn default_config_file_loads_and_validates() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
    let config = AppConfig::load_from(&dir).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.port, 5001);
    assert_eq!(config.players.len(), 7);
    assert_eq!(config.prediction.default_category(), Ok(PitchCategory::Fast));
}

#[test]
fn shipped_pitch_map_matches_built_in_table() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/pitch_map.json");
    let from_file = PitchMap::from_json_file(&path).unwrap();
    let built_in = PitchMap::default();

    assert_eq!(from_file.len(), built_in.len());
    for code in ["FF", "SI", "FC", "CU", "SL", "ST", "CH", "FS", "KN", "XX"] {
        assert_eq!(from_file.normalize(code), built_in.normalize(code), "{code}");
    }
}
