use super::*;
use futures::executor::block_on;

use serde_json::Value;

use crate::net::test_support::{ScriptedTransport, TestSession};
use crate::state::auth::SessionHandle;
use crate::util::auth::{LOGIN_PATH, RouteDecision, route_decision};
use crate::util::credential_store::CredentialStore;

// =============================================================
// classification helpers
// =============================================================

#[test]
fn classify_maps_status_ranges() {
    assert_eq!(classify(200), None);
    assert_eq!(classify(204), None);
    assert_eq!(classify(401), Some(ErrorKind::Unauthorized(401)));
    assert_eq!(classify(403), Some(ErrorKind::Unauthorized(403)));
    assert_eq!(classify(404), Some(ErrorKind::Client(404)));
    assert_eq!(classify(500), Some(ErrorKind::Server(500)));
    assert_eq!(classify(302), Some(ErrorKind::Server(302)));
}

#[test]
fn error_from_response_prefers_server_message() {
    let err = error_from_response(ErrorKind::Client(400), r#"{"error":"Credenciales inválidas"}"#);
    assert_eq!(err.message, "Credenciales inválidas");
    assert_eq!(err.to_string(), "Credenciales inválidas");
}

#[test]
fn error_from_response_falls_back_to_generic_message() {
    for body in ["", "<html>oops</html>", "{}", r#"{"error":"  "}"#, r#"{"error":null}"#] {
        assert_eq!(error_from_response(ErrorKind::Server(502), body).message, UNREACHABLE_MESSAGE);
    }
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("aaa.bbb.ccc"), "Bearer aaa.bbb.ccc");
}

// =============================================================
// send
// =============================================================

#[test]
fn send_attaches_current_token() {
    let transport = ScriptedTransport::default().reply(200, "[]");
    let session = TestSession::signed_in("aaa.bbb.ccc");
    let gateway = Gateway::new(&transport, &session, "https://api.test");

    let value = block_on(gateway.send(Method::Get, "/api/orders", None)).unwrap();
    assert_eq!(value, serde_json::json!([]));

    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url, "https://api.test/api/orders");
    assert_eq!(seen[0].bearer.as_deref(), Some("aaa.bbb.ccc"));
}

#[test]
fn send_reads_token_at_call_time() {
    let transport = ScriptedTransport::default().reply(200, "{}").reply(200, "{}");
    let session = TestSession::signed_in("first");
    let gateway = Gateway::new(&transport, &session, "");

    block_on(gateway.send(Method::Get, "/api/accounts", None)).unwrap();
    session.login("second".to_owned());
    block_on(gateway.send(Method::Get, "/api/accounts", None)).unwrap();

    let seen = transport.seen.borrow();
    assert_eq!(seen[0].bearer.as_deref(), Some("first"));
    assert_eq!(seen[1].bearer.as_deref(), Some("second"));
}

#[test]
fn send_empty_success_body_is_null() {
    let transport = ScriptedTransport::default().reply(204, "");
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");
    assert_eq!(block_on(gateway.send(Method::Delete, "/api/users/1", None)), Ok(Value::Null));
}

#[test]
fn send_transport_failure_leaves_session_untouched() {
    let transport = ScriptedTransport::default().unreachable();
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");

    let err = block_on(gateway.send(Method::Get, "/api/orders", None)).unwrap_err();
    assert_eq!(err, GatewayError::transport());
    assert_eq!(session.current_token().as_deref(), Some("t.t.t"));
    assert_eq!(session.logouts.get(), 0);
}

#[test]
fn send_undecodable_success_body_is_decode_error() {
    let transport = ScriptedTransport::default().reply(200, "not json");
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");
    let err = block_on(gateway.send(Method::Get, "/api/orders", None)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Decode);
}

#[test]
fn send_server_error_keeps_session() {
    let transport = ScriptedTransport::default().reply(500, r#"{"error":"db down"}"#);
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");
    let err = block_on(gateway.send(Method::Get, "/api/errors", None)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Server(500));
    assert_eq!(err.message, "db down");
    assert_eq!(session.logouts.get(), 0);
}

#[test]
fn rejected_session_logs_out_and_relocks_guard() {
    let transport = ScriptedTransport::default().reply(401, r#"{"error":"token expired"}"#);
    let session = TestSession::signed_in("aaa.bbb.ccc");
    let gateway = Gateway::new(&transport, &session, "");

    let err = block_on(gateway.send(Method::Get, "/api/orders", None)).unwrap_err();
    assert!(err.is_rejection());
    assert_eq!(session.current_token(), None);
    assert_eq!(session.store.read(), None);
    assert_eq!(session.logouts.get(), 1);
    assert_eq!(route_decision("/orders", &session.state.borrow()), RouteDecision::Redirect(LOGIN_PATH));
}

#[test]
fn forbidden_is_also_a_rejection() {
    let transport = ScriptedTransport::default().reply(403, "");
    let session = TestSession::signed_in("aaa.bbb.ccc");
    let gateway = Gateway::new(&transport, &session, "");
    block_on(gateway.send(Method::Get, "/api/users", None)).unwrap_err();
    assert_eq!(session.logouts.get(), 1);
}

#[test]
fn repeated_rejections_log_out_once() {
    let transport = ScriptedTransport::default().reply(401, "").reply(401, "").reply(401, "");
    let session = TestSession::signed_in("aaa.bbb.ccc");
    let gateway = Gateway::new(&transport, &session, "");
    for _ in 0..3 {
        let err = block_on(gateway.send(Method::Get, "/api/orders", None)).unwrap_err();
        assert!(err.is_rejection());
    }
    assert_eq!(session.logouts.get(), 1);
}

#[test]
fn rejection_of_replaced_token_keeps_new_session() {
    struct SwapOnSend<'a> {
        session: &'a TestSession,
    }

    impl Transport for SwapOnSend<'_> {
        async fn execute(&self, _request: ApiRequest) -> Result<RawResponse, String> {
            // The user signs in again while the old request is in flight.
            self.session.login("fresh".to_owned());
            Ok(RawResponse { status: 401, body: String::new() })
        }
    }

    let session = TestSession::signed_in("stale");
    let gateway = Gateway::new(SwapOnSend { session: &session }, &session, "");
    block_on(gateway.send(Method::Get, "/api/orders", None)).unwrap_err();
    assert_eq!(session.current_token().as_deref(), Some("fresh"));
    assert_eq!(session.logouts.get(), 0);
}

#[test]
fn send_never_retries() {
    let transport = ScriptedTransport::default().unreachable().reply(200, "{}");
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");
    block_on(gateway.send(Method::Get, "/api/orders", None)).unwrap_err();
    assert_eq!(transport.seen.borrow().len(), 1);
}

// =============================================================
// send_public and typed helpers
// =============================================================

#[test]
fn send_public_omits_bearer_and_never_logs_out() {
    let transport = ScriptedTransport::default().reply(401, r#"{"error":"bad credentials"}"#);
    let session = TestSession::signed_in("existing");
    let gateway = Gateway::new(&transport, &session, "");

    let err = block_on(gateway.send_public(Method::Post, "/api/login", Some(serde_json::json!({})))).unwrap_err();
    assert_eq!(err.message, "bad credentials");
    assert_eq!(transport.seen.borrow()[0].bearer, None);
    assert_eq!(session.current_token().as_deref(), Some("existing"));
    assert_eq!(session.logouts.get(), 0);
}

#[test]
fn get_json_decodes_typed_payload() {
    let transport = ScriptedTransport::default().reply(200, r#"{"cuentasActivas":3,"etiquetasHoy":10,"erroresRecientes":1}"#);
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");
    let stats: crate::net::types::Stats = block_on(gateway.get_json("/api/stats")).unwrap();
    assert_eq!(stats.active_accounts, 3);
    assert_eq!(stats.recent_errors, 1);
}

#[test]
fn get_json_wrong_shape_is_decode_error() {
    let transport = ScriptedTransport::default().reply(200, r#"{"unexpected":true}"#);
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");
    let err = block_on(gateway.get_json::<Vec<crate::net::types::User>>("/api/users")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Decode);
}

#[test]
fn post_json_sends_body() {
    let transport = ScriptedTransport::default().reply(201, r#"{"id":1}"#);
    let session = TestSession::signed_in("t.t.t");
    let gateway = Gateway::new(&transport, &session, "");
    let _: Value = block_on(gateway.post_json("/api/users", &serde_json::json!({ "email": "a@b.com" }))).unwrap();
    let seen = transport.seen.borrow();
    assert_eq!(seen[0].method, Method::Post);
    assert_eq!(seen[0].body, Some(serde_json::json!({ "email": "a@b.com" })));
}
