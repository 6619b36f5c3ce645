#![cfg(target_arch = "wasm32")]
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use vidframe_wasm::{field_visibility, render_embed, show_dimensions};

wasm_bindgen_test_configure!(run_in_browser);

fn to_js(value: &serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

#[wasm_bindgen_test]
fn renders_vimeo_from_panel_object() {
    let config = to_js(&serde_json::json!({
        "service": "vimeo",
        "url": "https://vimeo.com/76979871",
        "width": 640,
        "height": 360,
        "playFromBeginning": false,
        "startingTime": 30
    }));
    let html = render_embed(config, JsValue::UNDEFINED);
    assert!(html.contains("/76979871#t=30s"));
    assert!(html.contains(r#"width="640" height="360""#));
}

#[wasm_bindgen_test]
fn undefined_config_uses_url_missing_message() {
    let messages = to_js(&serde_json::json!({ "urlMissing": "URL fehlt" }));
    assert_eq!(render_embed(JsValue::UNDEFINED, messages), "URL fehlt");
}

#[wasm_bindgen_test]
fn unreadable_config_does_not_throw() {
    let messages = to_js(&serde_json::json!({ "urlMissing": "URL fehlt" }));
    assert_eq!(render_embed(JsValue::from_f64(3.0), messages), "URL fehlt");
}

#[wasm_bindgen_test]
fn visibility_for_dynamic_vimeo() {
    assert!(!show_dimensions("vimeo", true));
    let config = to_js(&serde_json::json!({ "service": "vimeo", "dynamicSize": true }));
    let visibility: serde_json::Value =
        serde_wasm_bindgen::from_value(field_visibility(config)).unwrap();
    assert_eq!(visibility["dimensions"], false);
    assert_eq!(visibility["dynamicSize"], true);
}

#[wasm_bindgen_test]
fn mistyped_field_keeps_the_url() {
    let config = to_js(&serde_json::json!({
        "service": "file",
        "url": "https://site.example/files/clip.mp4",
        "width": "wide",
        "height": 240
    }));
    let html = render_embed(config, JsValue::UNDEFINED);
    assert!(html.contains(r#"<video width="640" height="240" controls>"#));
    assert!(html.contains(r#"type="video/mp4""#));
}

#[wasm_bindgen_test]
fn non_object_messages_fall_back_to_defaults() {
    let html = render_embed(JsValue::UNDEFINED, JsValue::from_str("oops"));
    assert!(html.starts_with("URL missing"));
}
