//! Login / registration page.
//!
//! One form serving both modes, defaulting to registration. A successful
//! response stores the credential pair and hands the username up to the
//! app shell.

use dashboard_shared::{AuthResponse, DashboardClient};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::session;

#[derive(Properties, PartialEq)]
pub struct AuthFrontendProps {
    /// Called with the display name once the session is stored.
    pub on_login: Callback<String>,
}

pub struct AuthFrontend {
    login_mode: bool,
    busy: bool,
    error: Option<String>,
    username_ref: NodeRef,
    email_ref: NodeRef,
    password_ref: NodeRef,
}

pub enum Msg {
    ToggleMode,
    Submit,
    AuthOk(AuthResponse),
    AuthFailed(String),
}

impl Component for AuthFrontend {
    type Message = Msg;
    type Properties = AuthFrontendProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            login_mode: false,
            busy: false,
            error: None,
            username_ref: NodeRef::default(),
            email_ref: NodeRef::default(),
            password_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMode => {
                self.login_mode = !self.login_mode;
                self.error = None;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                let username = self.input_value(&self.username_ref);
                let email = self.input_value(&self.email_ref);
                let password = self.input_value(&self.password_ref);

                let missing = email.is_empty()
                    || password.is_empty()
                    || (!self.login_mode && username.is_empty());
                if missing {
                    self.error = Some("All fields are required.".to_string());
                    return true;
                }

                self.busy = true;
                self.error = None;
                let login_mode = self.login_mode;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let client = DashboardClient::for_web();
                    let result = if login_mode {
                        client.login(&email, &password).await
                    } else {
                        client.register(&username, &email, &password).await
                    };
                    match result {
                        Ok(auth) => link.send_message(Msg::AuthOk(auth)),
                        Err(e) => link.send_message(Msg::AuthFailed(e.to_string())),
                    }
                });
                true
            }
            Msg::AuthOk(auth) => {
                self.busy = false;
                session::store(&auth.access_token, &auth.username);
                ctx.props().on_login.emit(auth.username);
                false
            }
            Msg::AuthFailed(message) => {
                self.busy = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let toggle = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            Msg::ToggleMode
        });

        let title = if self.login_mode { "Login" } else { "Create Account" };
        let toggle_text = if self.login_mode { "New user?" } else { "Existing user?" };
        let toggle_action = if self.login_mode { "Create an account" } else { "Login" };

        html! {
            <div id="auth-container" class="auth-container">
                <form class="auth-form" {onsubmit}>
                    <h2>{title}</h2>
                    if let Some(error) = &self.error {
                        <div class="auth-error">{error}</div>
                    }
                    if !self.login_mode {
                        <div class="form-group">
                            <label for="username">{"Username"}</label>
                            <input id="username" type="text" ref={self.username_ref.clone()} />
                        </div>
                    }
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" ref={self.email_ref.clone()} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" ref={self.password_ref.clone()} />
                    </div>
                    <button type="submit" disabled={self.busy}>{title}</button>
                    <p class="auth-toggle">
                        {toggle_text}{" "}
                        <a href="#" onclick={toggle}>{toggle_action}</a>
                    </p>
                </form>
            </div>
        }
    }
}

impl AuthFrontend {
    fn input_value(&self, node: &NodeRef) -> String {
        node.cast::<HtmlInputElement>()
            .map(|input| input.value().trim().to_string())
            .unwrap_or_default()
    }
}
