use yew::prelude::*;

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="bg-gray-100 py-4 text-center">
                <div class="container mx-auto">
                    <p class="text-gray-600">{"© E-Library. All rights reserved."}</p>
                    <p class="text-gray-500">{"Contact: focuniport@gmail.com"}</p>
                </div>
            </footer>
        }
    }
}
