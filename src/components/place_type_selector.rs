use yew::prelude::*;

use super::app::use_map;
use crate::model::{MapAction, PlaceCategory};

#[function_component(PlaceTypeSelector)]
pub fn place_type_selector() -> Html {
    let store = use_map();
    html! {
        <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:8px;">
            { for PlaceCategory::ALL.iter().map(|&category| {
                let store = store.clone();
                let onclick = Callback::from(move |_| {
                    store.dispatch(MapAction::StartAddingPlace(category));
                });
                html! {
                    <button {onclick} style="display:flex; flex-direction:column; align-items:center; gap:6px; padding:12px 4px;">
                        <span style={format!("display:inline-block; width:14px; height:14px; border-radius:3px; background:{};", category.color())}></span>
                        <span style="font-size:12px;">{ category.label() }</span>
                    </button>
                }
            }) }
        </div>
    }
}
