use contracts::auth::AccountInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// The session state machine. Starts in `Resolving` while the stored tokens
/// are checked against the backend; every consumer suspends until one of the
/// two settled states is reached. Later sign-in/sign-out/refresh events move
/// it between the settled states through the same signal.
#[derive(Clone, Debug, Default)]
pub enum SessionState {
    #[default]
    Resolving,
    Anonymous,
    Authenticated {
        access_token: String,
        account: AccountInfo,
    },
}

impl SessionState {
    pub fn account(&self) -> Option<AccountInfo> {
        match self {
            SessionState::Authenticated { account, .. } => Some(account.clone()),
            _ => None,
        }
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Try to restore the session from localStorage on mount. Consumers see
    // Resolving until this settles one way or the other.
    Effect::new(move |_| {
        spawn_local(async move {
            let stored = storage::get_access_token();
            let Some(access_token) = stored else {
                set_session.set(SessionState::Anonymous);
                return;
            };

            // Validate the token by fetching the current account
            match api::get_current_account(&access_token).await {
                Ok(account) => {
                    set_session.set(SessionState::Authenticated {
                        access_token,
                        account,
                    });
                }
                Err(_) => {
                    // Token invalid or expired, try the refresh token
                    let refreshed = match storage::get_refresh_token() {
                        Some(refresh_token) => api::refresh_token(refresh_token).await.ok(),
                        None => None,
                    };

                    match refreshed {
                        Some(response) => {
                            storage::save_access_token(&response.access_token);
                            match api::get_current_account(&response.access_token).await {
                                Ok(account) => set_session.set(SessionState::Authenticated {
                                    access_token: response.access_token,
                                    account,
                                }),
                                Err(_) => {
                                    storage::clear_tokens();
                                    set_session.set(SessionState::Anonymous);
                                }
                            }
                        }
                        None => {
                            storage::clear_tokens();
                            set_session.set(SessionState::Anonymous);
                        }
                    }
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Helper: sign out. Revokes the refresh token server-side, then drops the
/// local session regardless of whether the revocation call went through.
pub fn sign_out(set_session: WriteSignal<SessionState>) {
    spawn_local(async move {
        if let Some(refresh_token) = storage::get_refresh_token() {
            let _ = api::logout(refresh_token).await;
        }
        storage::clear_tokens();
        set_session.set(SessionState::Anonymous);
    });
}
