use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}
