use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::SessionState, context::use_session, storage};

/// Which form the auth screen is showing.
#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (mode, set_mode) = signal(AuthMode::SignIn);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_session) = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let mode_val = mode.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Sign-up creates the account, then goes through the normal
            // login round-trip for its tokens.
            if mode_val == AuthMode::SignUp {
                if let Err(e) = api::register(username_val.clone(), password_val.clone()).await {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                    return;
                }
            }

            match api::login(username_val, password_val).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    storage::save_refresh_token(&response.refresh_token);

                    // Flipping the session state swaps the shell to the dashboard
                    set_session.set(SessionState::Authenticated {
                        access_token: response.access_token,
                        account: response.account,
                    });

                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let toggle_mode = move |_| {
        set_error_message.set(None);
        set_mode.update(|m| {
            *m = match *m {
                AuthMode::SignIn => AuthMode::SignUp,
                AuthMode::SignUp => AuthMode::SignIn,
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Shift Ledger"</h1>
                <h2>
                    {move || match mode.get() {
                        AuthMode::SignIn => "Sign in",
                        AuthMode::SignUp => "Create account",
                    }}
                </h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || match (is_loading.get(), mode.get()) {
                            (true, _) => "Working...",
                            (false, AuthMode::SignIn) => "Sign in",
                            (false, AuthMode::SignUp) => "Sign up",
                        }}
                    </button>
                </form>

                <button class="btn-link" on:click=toggle_mode disabled=move || is_loading.get()>
                    {move || match mode.get() {
                        AuthMode::SignIn => "No account yet? Sign up",
                        AuthMode::SignUp => "Already registered? Sign in",
                    }}
                </button>
            </div>
        </div>
    }
}
