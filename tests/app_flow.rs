use krinkle::{
    Config, InputEvent, KrinkleApp, PixmapSurface, Point, RecordingSurface, TilePolygon,
    TilingMode, TilingParams,
};
use krinkle_tiling::{Rgba, TileMeta};
use krinkle_visualizer::{style, DrawOp};
use tempfile::TempDir;

fn tiling_config() -> Config {
    let mut config = Config::default();
    config.parameters.mode = TilingMode::Tiling;
    config.parameters.rows = 3;
    config.view.canvas_width = 640;
    config.view.canvas_height = 480;
    config.overlays.show_wedge_labels = true;
    config
}

#[test]
fn test_update_and_render() {
    let mut app = KrinkleApp::new(&tiling_config());
    assert!(app.request_update());
    app.run_until_idle();
    assert!(!app.status().is_error());
    assert!(app.status().text.contains("| Polygons: 30"));

    // Auto-center framed the result within the canvas
    assert!(app.renderer().viewport().scale() <= 5.0);

    let mut surface = RecordingSurface::new(640, 480);
    app.render(&mut surface);
    assert_eq!(surface.labels(), vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn test_pointer_input_pans_and_zooms() {
    let mut app = KrinkleApp::new(&tiling_config());
    app.request_update();
    app.run_until_idle();
    let (ox, oy) = app.renderer().viewport().offset();
    let scale = app.renderer().viewport().scale();

    app.handle_input(InputEvent::PointerDown { x: 100.0, y: 100.0 });
    assert!(app.handle_input(InputEvent::PointerMove { x: 140.0, y: 90.0 }));
    app.handle_input(InputEvent::PointerUp);
    assert_eq!(app.renderer().viewport().offset(), (ox + 40.0, oy - 10.0));

    assert!(app.handle_input(InputEvent::Wheel { delta_y: 100.0 }));
    assert!(app.renderer().viewport().scale() < scale);
}

#[test]
fn test_hover_highlights_wedge() {
    let mut app = KrinkleApp::new(&tiling_config());
    let tile = TilePolygon::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ],
        Rgba::opaque(88, 166, 255),
        None,
        TileMeta {
            wedge_index: Some(3),
            row: Some(0),
            ..TileMeta::default()
        },
    );
    app.renderer_mut()
        .set_display_data(vec![tile], TilingMode::Tiling);

    let (sx, sy) = app.renderer().viewport().world_to_screen(Point::new(50.0, 50.0));
    assert!(app.handle_input(InputEvent::PointerMove { x: sx, y: sy }));
    assert_eq!(app.renderer().hover().unwrap().wedge_index, Some(3));
    assert!(!app.handle_input(InputEvent::PointerMove { x: sx, y: sy }));

    let mut surface = RecordingSurface::new(640, 480);
    app.render(&mut surface);
    assert!(surface
        .ops()
        .iter()
        .any(|op| matches!(op, DrawOp::FillPolygon { color, .. } if *color == style::HIGHLIGHT_WEDGE)));
}

#[test]
fn test_hover_on_generated_tiling() {
    let mut app = KrinkleApp::new(&tiling_config());
    app.set_parameters(TilingMode::Tiling, TilingParams::new(5, 2, 2).with_rows(3));
    assert!(app.request_update());
    app.run_until_idle();
    assert!(app.status().text.starts_with("(m, k, n) = (2, 5, 10)"));

    // Inside wedge 0's base tile
    let (sx, sy) = app.renderer().viewport().world_to_screen(Point::new(0.0, 50.0));
    assert!(app.handle_input(InputEvent::PointerMove { x: sx, y: sy }));
    let hover = app.renderer().hover().unwrap();
    assert!(hover.wedge_index.is_some() && hover.row.is_some());

    let mut surface = RecordingSurface::new(640, 480);
    app.render(&mut surface);
    let fills = surface.fills();
    assert!(fills.contains(&style::HIGHLIGHT_WEDGE));
    assert!(fills.contains(&style::HIGHLIGHT_DEPTH));
}

#[test]
fn test_parameter_change_replaces_polygons() {
    let mut app = KrinkleApp::new(&tiling_config());
    app.request_update();
    app.run_until_idle();
    let before = app.renderer().polygons().len();

    app.set_parameters(TilingMode::Wedge, TilingParams::new(5, 2, 1).with_rows(2));
    app.request_update();
    app.run_until_idle();
    assert_ne!(app.renderer().polygons().len(), before);
    assert_eq!(app.renderer().polygons().len(), 3);
    assert_eq!(app.renderer().mode(), TilingMode::Wedge);
}

#[test]
fn test_png_render_from_app() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.png");

    let mut app = KrinkleApp::new(&tiling_config());
    app.request_update();
    app.run_until_idle();

    let mut surface = PixmapSurface::new(640, 480).unwrap();
    app.render(&mut surface);
    surface.save_png(&path).unwrap();
    assert!(path.metadata().unwrap().len() > 0);
}
