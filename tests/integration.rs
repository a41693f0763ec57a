// SPDX-License-Identifier: MPL-2.0
use iced_carousel::carousel::{CarouselConfig, CarouselEvent, SlideController};
use iced_carousel::config::{self, Config};
use iced_carousel::i18n::I18n;
use iced_carousel::slide_scanner;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_scanned_gallery_drives_a_full_navigation_session() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"] {
        std::fs::write(dir.path().join(name), b"fake image data").expect("write image");
    }

    let deck = slide_scanner::scan_gallery(dir.path()).expect("scan gallery");
    assert_eq!(deck.len(), 5);

    let mut config = CarouselConfig::default();
    config.images_per_slide = 2.0;
    config.allow_zoom = true;
    config.use_thumbs = true;

    let mut controller = SlideController::new(deck, config);
    controller.update(800.0).expect("geometry pass");
    assert_eq!(controller.slide_count(), 3);

    // Three next() calls from index 0 land at index 2; a fourth is a no-op.
    for _ in 0..3 {
        controller.next().expect("navigation");
    }
    assert_eq!(controller.current_slide(), 2);
    assert_eq!(controller.next().expect("navigation"), None);
    assert_eq!(controller.current_slide(), 2);

    // Zoom in, settle the choreography, and come back.
    let event = controller.zoom(1).expect("zoom");
    assert_eq!(event, CarouselEvent::BeforeZoom { slide: 1 });
    while controller.tick(Duration::from_millis(100)) {}
    assert!(controller.is_zoomed());

    let event = controller.un_zoom().expect("unzoom");
    assert_eq!(event, Some(CarouselEvent::AfterUnzoom));
    while controller.tick(Duration::from_millis(100)) {}
    assert!(!controller.is_zoomed());
    assert_eq!(controller.carousel_opacity(), 1.0);

    // The thumbnail child followed every geometry pass.
    let thumbs = controller.thumbs().expect("thumb child");
    assert_eq!(thumbs.geometry().width(), 800.0);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_carousel_config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.carousel.use_dots = true;
    config.carousel.automatic = true;
    config.carousel.automatic_delay_ms = 1000;
    config.carousel.animation.kind = "fade".to_string();
    config.carousel.hide_elements_on_zoom = vec!["status".to_string()];

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");

    assert!(loaded.carousel.use_dots);
    assert!(loaded.carousel.automatic);
    assert_eq!(loaded.carousel.automatic_delay_ms, 1000);
    assert_eq!(loaded.carousel.animation.kind, "fade");
    assert_eq!(loaded.carousel.hide_elements_on_zoom, vec!["status"]);

    dir.close().expect("Failed to close temporary directory");
}
