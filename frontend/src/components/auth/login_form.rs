use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::auth::{request_otp, verify_otp_token};
use common::error::ApiResult;

use crate::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// Emits `(token, email)` once the server accepts the OTP.
    pub on_login: Callback<(String, String)>,
}

pub enum Msg {
    EmailChanged(String),
    OtpChanged(String),
    RequestOtp,
    OtpRequested(ApiResult<()>),
    Submit,
    Verified(ApiResult<String>),
}

pub struct LoginForm {
    api: ApiClient,
    email: String,
    otp: String,
    otp_requested: bool,
    loading: bool,
    error: Option<String>,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = LoginFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            api: ApiClient::default(),
            email: String::new(),
            otp: String::new(),
            otp_requested: false,
            loading: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EmailChanged(email) => {
                self.email = email;
                true
            }
            Msg::OtpChanged(otp) => {
                self.otp = otp;
                true
            }
            Msg::RequestOtp => {
                self.loading = true;
                self.error = None;
                let api = self.api.clone();
                let email = self.email.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::OtpRequested(request_otp(&api, &email).await));
                });
                true
            }
            Msg::OtpRequested(outcome) => {
                self.loading = false;
                match outcome {
                    Ok(()) => self.otp_requested = true,
                    Err(err) => {
                        gloo_console::error!("OTP request failed:", err.to_string());
                        self.error = Some(err.to_string());
                    }
                }
                true
            }
            Msg::Submit => {
                self.loading = true;
                self.error = None;
                let api = self.api.clone();
                let email = self.email.clone();
                let otp = self.otp.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Verified(verify_otp_token(&api, &email, &otp).await));
                });
                true
            }
            Msg::Verified(outcome) => {
                self.loading = false;
                match outcome {
                    Ok(token) => {
                        ctx.props()
                            .on_login
                            .emit((token, self.email.trim().to_string()));
                    }
                    Err(err) => {
                        gloo_console::error!("login failed:", err.to_string());
                        self.error = Some(err.to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let can_request = !self.loading && !self.email.is_empty();
        let can_submit = !self.loading && !self.email.is_empty() && !self.otp.is_empty();

        html! {
            <div class="p-8 max-w-md w-full">
                if let Some(error) = self.error.clone() {
                    <div class="mb-6 bg-red-50 border-l-4 border-red-500 p-4 rounded">
                        <p class="text-red-700">{error}</p>
                    </div>
                }
                <form class="space-y-6" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div>
                        <label for="login-email" class="block text-gray-700 font-medium mb-2">
                            {"Email Address"}
                        </label>
                        <input
                            type="email"
                            id="login-email"
                            class="w-full px-4 py-2 border border-gray-300 rounded-md"
                            placeholder="your@email.com"
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::EmailChanged(input.value())
                            })}
                        />
                    </div>
                    <div>
                        <label for="login-otp" class="block text-gray-700 font-medium mb-2">
                            {"One-Time Password"}
                        </label>
                        <div class="relative">
                            <input
                                type="text"
                                id="login-otp"
                                class="w-full px-4 py-3 border border-gray-300 rounded-md pr-24"
                                placeholder="Enter OTP"
                                value={self.otp.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::OtpChanged(input.value())
                                })}
                            />
                            <button
                                type="button"
                                class="absolute right-1 top-1 bottom-1 px-4 rounded-md bg-green-300 text-green-950 hover:bg-green-500"
                                disabled={!can_request}
                                onclick={link.callback(|_| Msg::RequestOtp)}
                            >
                                { if self.loading { "..." } else { "Get OTP" } }
                            </button>
                        </div>
                        if self.otp_requested {
                            <p class="text-gray-500 mt-1">{"Check your inbox for the code."}</p>
                        }
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md font-medium bg-green-700 hover:bg-green-800 text-white"
                        disabled={!can_submit}
                    >
                        { if self.loading { "Logging in..." } else { "Log In" } }
                    </button>
                </form>
            </div>
        }
    }
}
