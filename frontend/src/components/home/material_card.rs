use yew::prelude::*;

use common::model::Material;

#[derive(Properties, PartialEq)]
pub struct MaterialCardProps {
    pub material: Material,
}

pub struct MaterialCard;

impl Component for MaterialCard {
    type Message = ();
    type Properties = MaterialCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let material = &ctx.props().material;
        html! {
            <div class="bg-white rounded-lg shadow-md p-4">
                <h3 class="text-xl font-semibold mb-2">{material.course_title.clone()}</h3>
                <p class="text-gray-500 mb-1">
                    {format!("{} · {} level", material.course_code, material.level)}
                </p>
                <p class="text-gray-700 mb-2">{material.description.clone()}</p>
                <a
                    href={material.file_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-green-500 hover:text-green-700"
                >
                    {"View Material"}
                </a>
            </div>
        }
    }
}
