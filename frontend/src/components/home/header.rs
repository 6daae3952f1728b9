use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub email: Option<String>,
    pub on_logout: Callback<()>,
    pub on_upload: Callback<()>,
}

pub enum Msg {
    ToggleMenu,
    Upload,
    Logout,
}

pub struct Header {
    menu_open: bool,
}

impl Component for Header {
    type Message = Msg;
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::Upload => {
                self.menu_open = false;
                ctx.props().on_upload.emit(());
                true
            }
            Msg::Logout => {
                self.menu_open = false;
                ctx.props().on_logout.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let email = ctx.props().email.clone().unwrap_or_default();

        html! {
            <header class="bg-white shadow-md">
                <div class="container mx-auto py-4 px-4 flex items-center justify-between">
                    <span class="text-2xl font-bold text-green-500">{"E-Library"}</span>
                    <div class="relative">
                        <button
                            class="flex items-center space-x-2 p-2 rounded"
                            onclick={link.callback(|_| Msg::ToggleMenu)}
                        >
                            <span class="text-gray-700">{email}</span>
                        </button>
                        if self.menu_open {
                            <div class="absolute right-0 w-48 bg-white rounded-md shadow-lg z-50 overflow-hidden">
                                <button
                                    class="w-full text-left py-3 px-6 hover:bg-gray-100"
                                    onclick={link.callback(|_| Msg::Upload)}
                                >
                                    {"Upload Material"}
                                </button>
                                <button
                                    class="w-full text-left py-3 px-6 text-white bg-red-500 hover:bg-red-600"
                                    onclick={link.callback(|_| Msg::Logout)}
                                >
                                    {"Logout"}
                                </button>
                            </div>
                        }
                    </div>
                </div>
            </header>
        }
    }
}
