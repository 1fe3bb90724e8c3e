//! WASM-target tests for persona-types.
//!
//! Covers the pieces that depend on browser entropy and clocks
//! (`uuid` with `js`, `chrono` with `wasmbind`) under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use persona_types::config::ChatConfig;
use persona_types::message::Turn;
use persona_types::persona::PersonaId;
use persona_types::request::CollaboratorRequest;
use persona_types::session::{MessageToken, SessionId, SessionInfo};

#[wasm_bindgen_test]
fn message_token_generates_in_browser() {
    let token = MessageToken::generate();
    assert!(token.is_well_formed());
}

#[wasm_bindgen_test]
fn session_info_has_timestamp() {
    let info = SessionInfo::new();
    assert!(info.started_at.contains('T'));
}

#[wasm_bindgen_test]
fn request_serializes() {
    let persona = PersonaId::default().persona();
    let req = CollaboratorRequest::new(
        &ChatConfig::default(),
        "hello",
        persona.system_message(),
        &SessionId::compose("carol", persona),
        &MessageToken::generate(),
        &[Turn::user("earlier")],
    );
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains(r#""unique_session_id":"carolDefaultPersona""#));
    assert!(json.contains(r#""collection_name":"conversation""#));
}
