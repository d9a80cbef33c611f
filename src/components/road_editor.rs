use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::app::use_map;
use crate::model::{MapAction, Point, Selection};

/// Modal for the road picked on the canvas: rename, recost, resize, delete.
#[function_component(RoadEditor)]
pub fn road_editor() -> Html {
    let store = use_map();
    let target = match &store.selection {
        Selection::Road(id) => Some(id.clone()),
        _ => None,
    };
    let road = target
        .as_ref()
        .and_then(|id| store.city_map.find_road(id))
        .cloned();

    let staged_name = use_state(String::new);
    let staged_cost = use_state(String::new);
    let staged_width = use_state(String::new);
    {
        let staged_name = staged_name.clone();
        let staged_cost = staged_cost.clone();
        let staged_width = staged_width.clone();
        let snapshot = road.clone();
        use_effect_with(target.clone(), move |_| {
            if let Some(road) = snapshot {
                staged_name.set(road.name);
                staged_cost.set(road.cost.to_string());
                staged_width.set(road.width.to_string());
            }
            || ()
        });
    }

    let Some(road) = road else {
        return html! {};
    };

    let close_cb = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(MapAction::Select(Selection::None)))
    };
    let text_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let save_cb = {
        let store = store.clone();
        let staged_name = staged_name.clone();
        let staged_cost = staged_cost.clone();
        let staged_width = staged_width.clone();
        let road = road.clone();
        Callback::from(move |_| {
            let mut updated = road.clone();
            if !staged_name.trim().is_empty() {
                updated.name = (*staged_name).clone();
            }
            updated.cost = staged_cost.parse().unwrap_or(road.cost);
            updated.width = staged_width.parse().unwrap_or(road.width);
            store.dispatch(MapAction::UpdateRoad(updated));
            store.dispatch(MapAction::Select(Selection::None));
        })
    };
    let delete_cb = {
        let store = store.clone();
        let id = road.id.clone();
        Callback::from(move |_| {
            store.dispatch(MapAction::DeleteRoad(id.clone()));
        })
    };

    let field_style = "display:flex; flex-direction:column; gap:4px;";
    let label_style = "font-size:12px; color:#8b949e;";

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{"Edit Road"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="font-size:12px; color:#8b949e;">
                { format!("({:.0}, {:.0}) to ({:.0}, {:.0})", road.start.x, road.start.y, road.end.x, road.end.y) }
            </div>
            <div style={field_style}>
                <label style={label_style}>{"Name"}</label>
                <input value={(*staged_name).clone()} oninput={text_input(staged_name.clone())} />
            </div>
            <div style="display:grid; grid-template-columns:1fr 1fr; gap:8px;">
                <div style={field_style}>
                    <label style={label_style}>{"Cost"}</label>
                    <input type="number" min="1" value={(*staged_cost).clone()} oninput={text_input(staged_cost.clone())} />
                </div>
                <div style={field_style}>
                    <label style={label_style}>{"Width (px)"}</label>
                    <input type="number" value={(*staged_width).clone()} oninput={text_input(staged_width.clone())} />
                </div>
            </div>
            <div style="display:flex; gap:8px;">
                <button style="flex:1;" onclick={save_cb}>{"Save"}</button>
                <button style="color:#f85149;" onclick={delete_cb}>{"Delete Road"}</button>
            </div>
        </div>
    </div>}
}

/// Sidebar form for creating a road from typed endpoints.
#[function_component(AddRoadForm)]
pub fn add_road_form() -> Html {
    let store = use_map();
    let name = use_state(String::new);
    let start_x = use_state(|| "0".to_string());
    let start_y = use_state(|| "0".to_string());
    let end_x = use_state(|| "200".to_string());
    let end_y = use_state(|| "0".to_string());
    let width = use_state(|| "15".to_string());
    let cost = use_state(|| "1".to_string());

    let text_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            state.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let add_cb = {
        let store = store.clone();
        let name = name.clone();
        let start_x = start_x.clone();
        let start_y = start_y.clone();
        let end_x = end_x.clone();
        let end_y = end_y.clone();
        let width = width.clone();
        let cost = cost.clone();
        Callback::from(move |_| {
            let road_name = if name.trim().is_empty() {
                "New Road".to_string()
            } else {
                (*name).clone()
            };
            store.dispatch(MapAction::AddRoad {
                name: road_name,
                start: Point {
                    x: start_x.parse().unwrap_or(0.0),
                    y: start_y.parse().unwrap_or(0.0),
                },
                end: Point {
                    x: end_x.parse().unwrap_or(0.0),
                    y: end_y.parse().unwrap_or(0.0),
                },
                width: width.parse().unwrap_or(15.0),
                cost: cost.parse().unwrap_or(1),
            });
            name.set(String::new());
        })
    };

    let field_style = "display:flex; flex-direction:column; gap:2px;";
    let label_style = "font-size:11px; color:#8b949e;";

    html! {
        <div style="display:flex; flex-direction:column; gap:8px;">
            <div style={field_style}>
                <label style={label_style}>{"Name"}</label>
                <input placeholder="New Road" value={(*name).clone()} oninput={text_input(name.clone())} />
            </div>
            <div style="display:grid; grid-template-columns:1fr 1fr; gap:6px;">
                <div style={field_style}>
                    <label style={label_style}>{"Start X"}</label>
                    <input type="number" value={(*start_x).clone()} oninput={text_input(start_x.clone())} />
                </div>
                <div style={field_style}>
                    <label style={label_style}>{"Start Y"}</label>
                    <input type="number" value={(*start_y).clone()} oninput={text_input(start_y.clone())} />
                </div>
                <div style={field_style}>
                    <label style={label_style}>{"End X"}</label>
                    <input type="number" value={(*end_x).clone()} oninput={text_input(end_x.clone())} />
                </div>
                <div style={field_style}>
                    <label style={label_style}>{"End Y"}</label>
                    <input type="number" value={(*end_y).clone()} oninput={text_input(end_y.clone())} />
                </div>
                <div style={field_style}>
                    <label style={label_style}>{"Width (px)"}</label>
                    <input type="number" value={(*width).clone()} oninput={text_input(width.clone())} />
                </div>
                <div style={field_style}>
                    <label style={label_style}>{"Cost"}</label>
                    <input type="number" min="1" value={(*cost).clone()} oninput={text_input(cost.clone())} />
                </div>
            </div>
            <button onclick={add_cb}>{"Add Road"}</button>
        </div>
    }
}
