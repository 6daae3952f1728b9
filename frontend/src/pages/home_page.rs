use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::catalog::{Catalog, FetchOutcome};
use common::error::ApiResult;
use common::model::Material;

use crate::api::ApiClient;
use crate::components::home::{Footer, Header, LevelDropdown, MaterialCard};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub email: Option<String>,
    pub on_logout: Callback<()>,
    pub on_upload: Callback<()>,
}

pub enum Msg {
    SearchChanged(String),
    LevelChanged(Option<u32>),
    Refresh,
    /// A fetch resolved. The sequence number pairs the response with the
    /// request that issued it; stale ones are dropped by the catalog.
    Fetched(u64, ApiResult<Vec<Material>>),
}

pub struct HomePage {
    api: ApiClient,
    catalog: Catalog,
    search: String,
    level: Option<u32>,
    loading: bool,
}

impl HomePage {
    fn spawn_fetch(&mut self, ctx: &Context<Self>) {
        let seq = self.catalog.begin_fetch();
        self.loading = true;
        let api = self.api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Fetched(seq, api.list_materials().await));
        });
    }

    fn visible(&self) -> Vec<Material> {
        self.catalog
            .filter(&self.search)
            .into_iter()
            .filter(|m| m.matches_level(self.level))
            .collect()
    }
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomePageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            api: ApiClient::default(),
            catalog: Catalog::new(),
            search: String::new(),
            level: None,
            loading: false,
        };
        page.spawn_fetch(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SearchChanged(term) => {
                // Filtering is local; no refetch per keystroke.
                self.search = term;
                true
            }
            Msg::LevelChanged(level) => {
                self.level = level;
                true
            }
            Msg::Refresh => {
                self.spawn_fetch(ctx);
                true
            }
            Msg::Fetched(seq, result) => match self.catalog.complete_fetch(seq, result) {
                FetchOutcome::Stale => false,
                FetchOutcome::Replaced => {
                    self.loading = false;
                    true
                }
                FetchOutcome::Failed(err) => {
                    gloo_console::error!("materials fetch failed:", err.to_string());
                    self.loading = false;
                    true
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = self.visible();

        html! {
            <div class="flex flex-col min-h-screen">
                <Header
                    email={ctx.props().email.clone()}
                    on_logout={ctx.props().on_logout.clone()}
                    on_upload={ctx.props().on_upload.clone()}
                />
                <main class="container mx-auto p-4 flex-grow">
                    <div class="flex gap-4 mb-4">
                        <input
                            type="text"
                            placeholder="Search for materials..."
                            class="shadow border rounded w-full py-2 px-3 text-gray-700 leading-tight"
                            value={self.search.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::SearchChanged(input.value())
                            })}
                        />
                        <LevelDropdown
                            value={self.level}
                            on_change={link.callback(Msg::LevelChanged)}
                        />
                        <button
                            class="bg-green-500 hover:bg-green-700 text-white font-bold py-2 px-4 rounded"
                            disabled={self.loading}
                            onclick={link.callback(|_| Msg::Refresh)}
                        >
                            { if self.loading { "..." } else { "Refresh" } }
                        </button>
                    </div>

                    if let Some(error) = self.catalog.error() {
                        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4" role="alert">
                            <strong class="font-bold">{"Error! "}</strong>
                            <span>{error.to_string()}</span>
                        </div>
                    }

                    if visible.is_empty() && self.catalog.error().is_none() && !self.loading {
                        <p>{"No materials found."}</p>
                    }

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        { for visible.into_iter().map(|material| {
                            let key = material.id.clone();
                            html! { <MaterialCard {key} {material} /> }
                        }) }
                    </div>
                </main>
                <Footer />
            </div>
        }
    }
}
