//! Browser-side checks, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use flower_field::FlowerField;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn seeded_field_starts_with_initial_plants() {
    let field = FlowerField::with_seed(canvas(1600, 2000), 42).unwrap();
    assert_eq!(field.plant_count(), 4);
}

#[wasm_bindgen_test]
fn narrow_canvas_grows_nothing() {
    let mut field = FlowerField::with_seed(canvas(700, 2000), 42).unwrap();
    assert_eq!(field.plant_count(), 0);
    for _ in 0..100 {
        field.render();
    }
    assert_eq!(field.plant_count(), 0);
}

#[wasm_bindgen_test]
fn frames_render_with_pointer() {
    let mut field = FlowerField::with_seed(canvas(1600, 1200), 7).unwrap();
    for i in 0..120 {
        field.on_pointer_move(100.0 + i as f32, 600.0);
        field.render();
    }
    field.on_pointer_leave();
    field.resize(1400, 2400);
    field.render();
    assert!(field.plant_count() >= 4);
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(FlowerField::with_config(canvas(800, 600), "smoothing_rate: 3.0").is_err());
}
