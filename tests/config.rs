//! Tests for engine configuration files

use tabdock::config::DockConfig;
use tabdock::geometry::Size;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = DockConfig::default();
    assert_eq!(config.divider_extent, 4);
    assert_eq!(config.min_child_extent, 200);
    assert_eq!(config.widget_min_extent, 100);
    assert_eq!(config.float_window_size, Size::new(900, 600));
    assert!(!config.live_resize);

    let metrics = config.split_metrics();
    assert_eq!(metrics.divider_extent, 4);
    assert_eq!(metrics.preferred_extent, 200);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = DockConfig {
        tab_width: 150,
        live_resize: true,
        float_window_size: Size::new(640, 480),
        ..DockConfig::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(DockConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "drag_threshold: 4\nlive_resize: true\n").unwrap();

    let config = DockConfig::load_from(&path).unwrap();
    assert_eq!(config.drag_threshold, 4);
    assert!(config.live_resize);
    assert_eq!(config.tab_bar_height, DockConfig::default().tab_bar_height);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "divider_extent: [not, a, number]\n").unwrap();
    let err = DockConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));

    assert!(DockConfig::load_from(&dir.path().join("missing.yaml")).is_err());
}
