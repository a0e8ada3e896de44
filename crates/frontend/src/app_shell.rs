//! Application shell: the auth gate.
//!
//! Shows a resolving placeholder until the session settles, then either the
//! login page or the dashboard.

use leptos::prelude::*;

use crate::domain::shift_records::ui::dashboard::DashboardPage;
use crate::system::auth::context::{use_session, SessionState};
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppShell() -> impl IntoView {
    let (session, _) = use_session();

    move || match session.get() {
        SessionState::Resolving => view! {
            <div class="app-loading">"Loading..."</div>
        }
        .into_any(),
        SessionState::Anonymous => view! { <LoginPage /> }.into_any(),
        SessionState::Authenticated { .. } => view! { <DashboardPage /> }.into_any(),
    }
}
