#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_canvas(id: &str, width: u32, height: u32) -> web_sys::HtmlCanvasElement {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    let style = format!("display:block;width:{width}px;height:{height}px");
    canvas.set_attribute("style", &style).unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvases_are_a_silent_no_op() {
    assert!(document().get_element_by_id("hero-canvas").is_none());
    glyphwarp::start_glyph_field();
    glyphwarp::start_warp_starfield();
    assert!(!glyphwarp::is_glyph_field_running());
    assert!(!glyphwarp::is_warp_starfield_running());
}

#[wasm_bindgen_test]
fn starfield_sizes_canvas_to_layout_and_stops() {
    let canvas = add_canvas("contact-canvas", 320, 180);
    glyphwarp::start_warp_starfield();
    assert!(glyphwarp::is_warp_starfield_running());
    assert_eq!(canvas.width(), 320);
    assert_eq!(canvas.height(), 180);

    assert!(glyphwarp::stop_warp_starfield());
    assert!(!glyphwarp::stop_warp_starfield());
    canvas.remove();
}

#[wasm_bindgen_test]
fn glyph_field_scales_backing_store() {
    let canvas = add_canvas("hero-canvas", 200, 100);
    glyphwarp::start_glyph_field();
    assert!(glyphwarp::is_glyph_field_running());

    let window = web_sys::window().unwrap();
    let dpr = window.device_pixel_ratio();
    let inner_w = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), (inner_w as f32 * dpr as f32) as u32);

    assert!(glyphwarp::stop_glyph_field());
    canvas.remove();
}

fn dispatch_resize() {
    let event = web_sys::Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn restart_replaces_listeners_instead_of_stacking() {
    let canvas = add_canvas("hero-canvas", 200, 100);
    let baseline = glyphwarp::attached_listeners();

    glyphwarp::start_glyph_field();
    assert_eq!(glyphwarp::attached_listeners(), baseline + 3);
    assert!(glyphwarp::stop_glyph_field());
    assert_eq!(glyphwarp::attached_listeners(), baseline);

    // shrink the backing store so only a live resize handler can restore it
    glyphwarp::start_glyph_field();
    assert_eq!(glyphwarp::attached_listeners(), baseline + 3);
    canvas.set_width(1);
    dispatch_resize();

    let window = web_sys::window().unwrap();
    let dpr = window.device_pixel_ratio();
    let inner_w = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), (inner_w as f32 * dpr as f32) as u32);

    assert!(glyphwarp::stop_glyph_field());
    assert_eq!(glyphwarp::attached_listeners(), baseline);
    canvas.remove();
}

#[wasm_bindgen_test]
fn starfield_restart_detaches_resize_listener() {
    let canvas = add_canvas("contact-canvas", 320, 180);
    let baseline = glyphwarp::attached_listeners();

    glyphwarp::start_warp_starfield();
    glyphwarp::start_warp_starfield();
    assert_eq!(glyphwarp::attached_listeners(), baseline + 1);
    assert!(glyphwarp::stop_warp_starfield());
    assert_eq!(glyphwarp::attached_listeners(), baseline);

    glyphwarp::start_warp_starfield();
    canvas.set_width(1);
    dispatch_resize();
    assert_eq!(canvas.width(), 320);

    assert!(glyphwarp::stop_warp_starfield());
    assert_eq!(glyphwarp::attached_listeners(), baseline);
    canvas.remove();
}

#[wasm_bindgen_test]
fn failed_start_leaves_nothing_running() {
    let baseline = glyphwarp::attached_listeners();
    glyphwarp::start_glyph_field();
    assert!(!glyphwarp::is_glyph_field_running());
    assert_eq!(glyphwarp::attached_listeners(), baseline);
}
