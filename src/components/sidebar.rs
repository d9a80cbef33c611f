use yew::prelude::*;

use super::app::use_map;
use super::place_details::PlaceDetails;
use super::place_type_selector::PlaceTypeSelector;
use super::road_editor::AddRoadForm;
use super::search_panel::SearchPanel;
use crate::model::{EditorMode, MapAction, PlaceCategory};

fn section(title: &str, body: Html) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:8px; padding-top:14px; border-top:1px solid #21262d;">
            <h2 style="margin:0; font-size:15px;">{ title }</h2>
            { body }
        </div>
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let store = use_map();
    let gs = store.city_map.grid_size;

    let content = if let Some(place) = store.selected_place() {
        html! { <PlaceDetails place={place.clone()} /> }
    } else if let EditorMode::Adding(category) = store.mode {
        let cancel_cb = {
            let store = store.clone();
            Callback::from(move |_| store.dispatch(MapAction::CancelAddingPlace))
        };
        html! {
            <div style="display:flex; flex-direction:column; gap:10px;">
                <h2 style="margin:0; font-size:16px;">{ format!("Adding New {}", category.label()) }</h2>
                <p style="margin:0; font-size:13px; color:#8b949e;">{"Click on the map to place it"}</p>
                <button onclick={cancel_cb}>{"Cancel (Esc)"}</button>
            </div>
        }
    } else {
        html! {
            <>
                <div style="display:flex; flex-direction:column; gap:8px;">
                    <h2 style="margin:0; font-size:15px;">{"Add New Place"}</h2>
                    <PlaceTypeSelector />
                </div>
                { section("Locate Place", html!{ <SearchPanel /> }) }
                { section("Add Road", html!{ <AddRoadForm /> }) }
                { section("Instructions", html!{
                    <ul style="margin:0; padding-left:18px; font-size:13px; color:#8b949e; display:flex; flex-direction:column; gap:4px;">
                        <li>{"Click on a place to view/edit details"}</li>
                        <li>{"Click on a lane to update its cost or delete it"}</li>
                        <li>{"Click on a road to edit or remove it"}</li>
                        <li>{"Drag to pan, scroll to zoom"}</li>
                        <li>{"Search for places by name or address"}</li>
                    </ul>
                }) }
            </>
        }
    };

    let quick_add = if store.selected_place().is_none() && store.mode == EditorMode::Idle {
        let store = store.clone();
        let onclick = Callback::from(move |_| {
            store.dispatch(MapAction::StartAddingPlace(PlaceCategory::Commercial));
        });
        html! {
            <div style="margin-top:auto; border-top:1px solid #21262d; padding:14px;">
                <button style="width:100%;" {onclick}>{"+ Add New Place"}</button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div style="width:320px; flex-shrink:0; border-left:1px solid #30363d; background:#0d1117; display:flex; flex-direction:column; height:100%; overflow-y:auto;">
            <div style="padding:14px; border-bottom:1px solid #21262d;">
                <h1 style="margin:0; font-size:18px;">{"Interactive City Map"}</h1>
                <p style="margin:4px 0 0; font-size:12px; color:#8b949e;">
                    { format!("{} - {}x{} Grid", store.city_map.name, gs.width, gs.height) }
                </p>
            </div>
            <div style="padding:14px; display:flex; flex-direction:column; gap:14px;">
                { content }
            </div>
            { quick_add }
        </div>
    }
}
