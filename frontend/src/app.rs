use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::error::ApiResult;
use common::session::SessionStore;

use crate::api::ApiClient;
use crate::pages::{AuthPage, HomePage, UploadPage};
use crate::storage::LocalCredentialStore;

#[derive(Clone, Copy, PartialEq)]
pub enum Route {
    Home,
    Upload,
}

pub enum Msg {
    /// Login completed: the auth flow produced a token for this email.
    LoggedIn { token: String, email: String },
    /// Outcome of the passive validation probe.
    Validated(ApiResult<()>),
    Logout,
    /// A protected call somewhere reported 401.
    SessionExpired,
    Navigate(Route),
}

/// Root component. Sole owner of the session store; pages read the session
/// through props and request mutation through messages, never directly.
pub struct App {
    session: SessionStore<LocalCredentialStore>,
    api: ApiClient,
    route: Route,
}

impl App {
    /// Passive validation: probe the API with the stored token and feed the
    /// outcome back in. The session stays usable while the probe is out.
    fn spawn_validation(&self, ctx: &Context<Self>) {
        let Some(token) = self.session.token().map(str::to_owned) else {
            return;
        };
        let api = self.api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Validated(api.check_session(&token).await));
        });
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: SessionStore::new(LocalCredentialStore),
            api: ApiClient::default(),
            route: Route::Home,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn { token, email } => {
                self.session.set_credential(token, email);
                self.route = Route::Home;
                self.spawn_validation(ctx);
                true
            }
            Msg::Validated(outcome) => match self.session.apply_validation(outcome) {
                Ok(valid) => {
                    if !valid {
                        gloo_console::warn!("stored credential rejected; logged out");
                    }
                    true
                }
                // Indeterminate (network blip, 5xx): keep the session as-is.
                Err(err) => {
                    gloo_console::warn!("session validation unresolved:", err.to_string());
                    false
                }
            },
            Msg::Logout | Msg::SessionExpired => {
                self.session.clear();
                self.route = Route::Home;
                true
            }
            Msg::Navigate(route) => {
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.session.token().is_none() {
            let on_login = link.callback(|(token, email)| Msg::LoggedIn { token, email });
            return html! { <AuthPage {on_login} /> };
        }

        match self.route {
            Route::Home => html! {
                <HomePage
                    email={self.session.email().map(str::to_owned)}
                    on_logout={link.callback(|_| Msg::Logout)}
                    on_upload={link.callback(|_| Msg::Navigate(Route::Upload))}
                />
            },
            Route::Upload => html! {
                <UploadPage
                    token={self.session.token().unwrap_or_default().to_owned()}
                    on_back={link.callback(|_| Msg::Navigate(Route::Home))}
                    on_unauthorized={link.callback(|_| Msg::SessionExpired)}
                />
            },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.spawn_validation(ctx);
        }
    }
}
