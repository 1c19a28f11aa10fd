//! In-memory doubles for the transport and session seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::net::gateway::{ApiRequest, RawResponse, Transport};
use crate::state::auth::{AuthState, SessionHandle};
use crate::util::credential_store::MemoryCredentialStore;

/// Replays canned responses and records every request it sees.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, String>>>,
    pub seen: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub fn unreachable(self) -> Self {
        self.replies.borrow_mut().push_back(Err("connection refused".to_owned()));
        self
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, String> {
        self.seen.borrow_mut().push(request);
        self.replies.borrow_mut().pop_front().unwrap_or_else(|| Err("no scripted reply".to_owned()))
    }
}

/// Non-reactive session that counts effective logouts.
#[derive(Default)]
pub(crate) struct TestSession {
    pub state: RefCell<AuthState>,
    pub store: MemoryCredentialStore,
    pub logouts: Cell<u32>,
}

impl TestSession {
    pub fn signed_in(token: &str) -> Self {
        let session = Self::default();
        session.login(token.to_owned());
        session
    }
}

impl SessionHandle for TestSession {
    fn current_token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_owned)
    }

    fn login(&self, token: String) {
        self.state.borrow_mut().login(&self.store, token);
    }

    fn logout(&self) -> bool {
        let cleared = self.state.borrow_mut().logout(&self.store);
        if cleared {
            self.logouts.set(self.logouts.get() + 1);
        }
        cleared
    }
}
