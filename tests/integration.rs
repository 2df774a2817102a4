// SPDX-License-Identifier: MPL-2.0
use wonder_atlas::app::config::{self, Config};
use wonder_atlas::app::persisted_state::AppState;
use wonder_atlas::catalog::{load_wonders, CatalogSource, WonderFilter, WonderKind};
use wonder_atlas::choropleth::{legend, Attribute, CountryFills};
use wonder_atlas::geography::load_countries;
use wonder_atlas::i18n::fluent::I18n;
use wonder_atlas::map::{visible_tiles, Camera, TileStyle, ZoomRange};
use wonder_atlas::restcountries::{CountryName, CountrySummary};
use std::fs;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("country-panel-capital"), "Capitale");
}

#[test]
fn map_preferences_survive_a_config_round_trip() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.map.base_style = Some(TileStyle::Satellite);
    config.map.attribute = Some(Attribute::Density);
    config.wonders.show = Some(false);
    config.wonders.kinds = Some(vec![WonderKind::NaturalWonder]);
    config::save_to_path(&config, &path).expect("save");

    let text = fs::read_to_string(&path).expect("read back");
    assert!(text.contains("[map]"));
    assert!(text.contains("Natural Wonder"));

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.base_style(), TileStyle::Satellite);
    assert_eq!(loaded.attribute(), Attribute::Density);
    assert!(!loaded.show_wonders());
    assert_eq!(loaded.wonder_filter().kinds(), &[WonderKind::NaturalWonder]);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[map]\nmax_zoom = 9.0\n").expect("write");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded.zoom_range().max(), 9.0);
    assert_eq!(loaded.base_style(), TileStyle::default());
    assert_eq!(loaded.rest_countries_url(), config::DEFAULT_REST_COUNTRIES_URL);
    assert!(loaded.show_wonders());
}

#[test]
fn unreadable_config_yields_defaults_and_a_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "this is = = not toml").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn embedded_catalog_filters_by_kind_and_name() {
    let wonders = load_wonders(&CatalogSource::Embedded).expect("embedded catalog");
    assert!(wonders.len() >= 20);

    let natural = WonderFilter::new([WonderKind::NaturalWonder], "").apply(&wonders);
    assert!(natural.iter().all(|w| w.kind == WonderKind::NaturalWonder));
    assert!(natural.iter().any(|w| w.name == "Mount Everest"));

    let search = WonderFilter::new(WonderKind::ALL, "machu").apply(&wonders);
    let names: Vec<&str> = search.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Machu Picchu"]);

    let sorted = WonderFilter::default().apply(&wonders);
    assert!(sorted
        .windows(2)
        .all(|pair| pair[0].name.to_lowercase() <= pair[1].name.to_lowercase()));
}

#[test]
fn catalog_directory_override_is_read() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("civilization-wonders.json"),
        r#"[{"id": 1, "name": "Stonehenge", "type": "Wonder",
             "coordinates": [-1.8262, 51.1789],
             "wikipedia": "https://en.wikipedia.org/wiki/Stonehenge"}]"#,
    )
    .expect("write civilization file");
    fs::write(dir.path().join("natural-wonders.json"), "null").expect("write natural file");

    let wonders = load_wonders(&CatalogSource::from_override(Some(dir.path().to_path_buf())))
        .expect("override catalog");
    assert_eq!(wonders.len(), 1);
    assert_eq!(wonders[0].name, "Stonehenge");
}

#[test]
fn embedded_countries_color_by_statistics() {
    let layer = load_countries(None).expect("embedded outlines");
    let peru = layer.find("Peru").expect("Peru outline");
    assert!(peru.contains(-75.0, -10.0));

    let statistics = vec![CountrySummary {
        name: CountryName {
            common: "Peru".to_string(),
            official: "Republic of Peru".to_string(),
        },
        cca3: Some("PER".to_string()),
        population: Some(32_971_846),
        area: Some(1_285_216.0),
        continents: vec!["South America".to_string()],
    }];

    for attribute in Attribute::ALL {
        let fills = CountryFills::build(&statistics, attribute);
        assert!(
            fills.lookup(&peru.name, peru.id.as_deref()).is_some(),
            "{attribute:?} has no color for Peru"
        );
        assert!(!legend(attribute).entries.is_empty());
    }
}

#[test]
fn persisted_state_round_trips_through_data_dir() {
    let dir = tempdir().expect("temp dir");
    let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
    camera.set_viewport(1024.0, 768.0);
    camera.set_view((-70.0, -15.0), 4.0);

    let state = AppState::capture(&camera, Some("Peru"));
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, state);

    let mut restored = Camera::new(ZoomRange::new(2.0, 12.0));
    loaded.restore_camera(&mut restored);
    assert_eq!(restored.zoom(), 4.0);
}

#[test]
fn vector_only_style_needs_no_tiles() {
    let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
    camera.set_viewport(800.0, 600.0);

    assert!(visible_tiles(&camera, TileStyle::None).is_empty());
    let tiles = visible_tiles(&camera, TileStyle::Light);
    assert!(!tiles.is_empty());
    assert!(tiles.iter().all(|tile| tile.x < 1 << tile.z && tile.y < 1 << tile.z));
}
