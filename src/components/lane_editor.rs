use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::app::use_map;
use crate::model::{MapAction, Selection};

/// Modal for the lane picked on the canvas: update its cost or delete it.
#[function_component(LaneEditor)]
pub fn lane_editor() -> Html {
    let store = use_map();
    let target = match &store.selection {
        Selection::Lane {
            block_x,
            block_y,
            lane_id,
        } => Some((*block_x, *block_y, lane_id.clone())),
        _ => None,
    };
    let lane = target
        .as_ref()
        .and_then(|(bx, by, id)| store.city_map.find_lane(*bx, *by, id))
        .cloned();

    let staged_cost = use_state(String::new);
    {
        let staged_cost = staged_cost.clone();
        let cost = lane.as_ref().map(|l| l.cost);
        use_effect_with(target.clone(), move |_| {
            if let Some(cost) = cost {
                staged_cost.set(cost.to_string());
            }
            || ()
        });
    }

    let Some((block_x, block_y, lane_id)) = target else {
        return html! {};
    };
    let Some(lane) = lane else {
        return html! {};
    };

    let close_cb = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(MapAction::Select(Selection::None)))
    };
    let oninput = {
        let staged_cost = staged_cost.clone();
        Callback::from(move |e: InputEvent| {
            staged_cost.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let save_cb = {
        let store = store.clone();
        let staged_cost = staged_cost.clone();
        let lane_id = lane_id.clone();
        Callback::from(move |_| {
            let Ok(cost) = staged_cost.parse::<u32>() else {
                return;
            };
            store.dispatch(MapAction::UpdateLaneCost {
                block_x,
                block_y,
                lane_id: lane_id.clone(),
                cost,
            });
            store.dispatch(MapAction::Select(Selection::None));
        })
    };
    let delete_cb = {
        let store = store.clone();
        let lane_id = lane_id.clone();
        Callback::from(move |_| {
            store.dispatch(MapAction::DeleteLane {
                block_x,
                block_y,
                lane_id: lane_id.clone(),
            });
        })
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{"Edit Lane"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="font-size:12px; color:#8b949e;">
                { format!("Block ({}, {}), {:?} to {:?}", block_x, block_y, lane.start, lane.end) }
            </div>
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span style="font-size:12px; color:#8b949e;">{"Traversal cost"}</span>
                <input type="number" min="1" value={(*staged_cost).clone()} {oninput} />
            </label>
            <div style="display:flex; gap:8px;">
                <button style="flex:1;" onclick={save_cb}>{"Save"}</button>
                <button style="color:#f85149;" onclick={delete_cb}>{"Delete Lane"}</button>
            </div>
        </div>
    </div>}
}
