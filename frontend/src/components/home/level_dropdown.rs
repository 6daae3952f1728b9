use web_sys::HtmlSelectElement;
use yew::prelude::*;

use common::model::LEVELS;

#[derive(Properties, PartialEq)]
pub struct LevelDropdownProps {
    pub value: Option<u32>,
    pub on_change: Callback<Option<u32>>,
}

pub struct LevelDropdown;

impl Component for LevelDropdown {
    type Message = ();
    type Properties = LevelDropdownProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_change = ctx.props().on_change.clone();
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value().parse().ok());
        });
        let selected = ctx.props().value;

        html! {
            <select
                class="shadow border rounded py-2 px-3 text-gray-700 leading-tight"
                {onchange}
            >
                <option value="" selected={selected.is_none()}>{"All levels"}</option>
                { for LEVELS.iter().map(|level| html! {
                    <option
                        value={level.to_string()}
                        selected={selected == Some(*level)}
                    >
                        {level.to_string()}
                    </option>
                }) }
            </select>
        }
    }
}
