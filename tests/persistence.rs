use brainscope::persistence::{load_config, save_config};
use brainscope::{ChartConfig, SeriesLook};
use eframe::egui::Color32;

#[test]
fn config_round_trips_through_json() {
    let mut cfg = ChartConfig::default();
    cfg.title = "Ward 7 monitor".to_string();
    cfg.description = "Overnight EEG".to_string();
    cfg.series_label = "Fp1".to_string();
    cfg.y_unit = Some("µV".to_string());
    cfg.look = SeriesLook {
        color: Color32::from_rgb(200, 30, 30),
        width: 1.0,
        show_points: false,
        point_size: 2.0,
        point_color: Color32::from_rgb(240, 120, 120),
    };
    cfg.messages.no_data = "No samples recorded.".to_string();
    cfg.analyzer.program = "/opt/eeg/analyzer".to_string();
    cfg.analyzer.args = vec!["--window".to_string(), "30s".to_string()];
    cfg.show_readout = false;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brainscope.json");
    save_config(&cfg, &path).unwrap();
    let restored = load_config(&path).unwrap();

    assert_eq!(restored.title, cfg.title);
    assert_eq!(restored.description, cfg.description);
    assert_eq!(restored.series_label, cfg.series_label);
    assert_eq!(restored.y_unit, cfg.y_unit);
    assert_eq!(restored.look, cfg.look);
    assert_eq!(restored.messages, cfg.messages);
    assert_eq!(restored.analyzer, cfg.analyzer);
    assert_eq!(restored.show_readout, cfg.show_readout);
}

#[test]
fn load_fails_cleanly_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(dir.path().join("absent.json")).is_err());
}

#[test]
fn load_fails_cleanly_on_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert!(load_config(&path).is_err());
}
