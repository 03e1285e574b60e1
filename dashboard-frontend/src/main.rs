use dashboard_frontend::session;
use dashboard_frontend::{AuthFrontend, DashboardFrontend};
use dashboard_shared::DashboardClient;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Boot sequence: a stored token is verified against the backend before the
/// dashboard mounts; anything else lands on the auth screen.
enum Phase {
    Checking,
    Auth,
    Dashboard { username: String },
}

enum Msg {
    Verified(String),
    Rejected,
    LoggedIn(String),
    LoggedOut,
}

struct App {
    phase: Phase,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        match (session::token(), session::username()) {
            (Some(token), Some(username)) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let client = DashboardClient::for_web().with_token(token);
                    match client.verify_token().await {
                        Ok(()) => link.send_message(Msg::Verified(username)),
                        Err(e) => {
                            log::warn!("stored token rejected: {e}");
                            session::clear();
                            link.send_message(Msg::Rejected);
                        }
                    }
                });
                Self {
                    phase: Phase::Checking,
                }
            }
            _ => Self { phase: Phase::Auth },
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.phase = match msg {
            Msg::Verified(username) | Msg::LoggedIn(username) => Phase::Dashboard { username },
            Msg::Rejected | Msg::LoggedOut => Phase::Auth,
        };
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.phase {
            Phase::Checking => html! {
                <div class="boot-screen">{"Checking session..."}</div>
            },
            Phase::Auth => {
                let on_login = ctx.link().callback(Msg::LoggedIn);
                html! { <AuthFrontend {on_login} /> }
            }
            Phase::Dashboard { username } => {
                let on_logout = ctx.link().callback(|_| Msg::LoggedOut);
                html! {
                    <DashboardFrontend username={username.clone()} {on_logout} />
                }
            }
        }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
