use yew::prelude::*;

use crate::components::auth::LoginForm;

#[derive(Properties, PartialEq)]
pub struct AuthPageProps {
    /// Emits `(token, email)` when the OTP flow completes.
    pub on_login: Callback<(String, String)>,
}

pub struct AuthPage;

impl Component for AuthPage {
    type Message = ();
    type Properties = AuthPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="min-h-screen bg-gradient-to-br from-green-50 to-yellow-100 flex items-center justify-center px-4 py-12">
                <div class="w-full max-w-md">
                    <div class="text-center mb-10">
                        <h1 class="text-3xl font-bold text-gray-800">{"Welcome Back"}</h1>
                        <p class="text-gray-600 mt-2">{"Log in to access the e-library"}</p>
                    </div>
                    <LoginForm on_login={ctx.props().on_login.clone()} />
                </div>
            </div>
        }
    }
}
