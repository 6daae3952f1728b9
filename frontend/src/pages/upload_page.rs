use yew::prelude::*;

use crate::components::upload::UploadForm;

#[derive(Properties, PartialEq)]
pub struct UploadPageProps {
    pub token: String,
    pub on_back: Callback<()>,
    pub on_unauthorized: Callback<()>,
}

pub struct UploadPage;

impl Component for UploadPage {
    type Message = ();
    type Properties = UploadPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_back = ctx.props().on_back.clone();
        html! {
            <div class="min-h-screen bg-gray-50">
                <div class="container mx-auto p-4">
                    <button
                        class="text-green-600 hover:text-green-800 font-medium mb-4"
                        onclick={Callback::from(move |_| on_back.emit(()))}
                    >
                        {"← Back to materials"}
                    </button>
                </div>
                <UploadForm
                    token={ctx.props().token.clone()}
                    on_unauthorized={ctx.props().on_unauthorized.clone()}
                />
            </div>
        }
    }
}
