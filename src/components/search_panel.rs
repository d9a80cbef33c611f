use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::app::use_map;
use crate::model::{MapAction, Place, Selection};

#[function_component(SearchPanel)]
pub fn search_panel() -> Html {
    let store = use_map();
    let results: Vec<Place> = store.search_places().into_iter().cloned().collect();
    let query = store.search_query.clone();

    let oninput = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            store.dispatch(MapAction::SetSearchQuery(value));
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:8px;">
            <input placeholder="Search by name or address" value={query.clone()} {oninput} />
            { if !query.trim().is_empty() {
                html! {
                    <div style="display:flex; flex-direction:column; gap:4px;">
                        <div style="font-size:12px; color:#8b949e;">
                            { format!("{} result{} found", results.len(), if results.len() == 1 { "" } else { "s" }) }
                        </div>
                        <div style="max-height:160px; overflow-y:auto; display:flex; flex-direction:column; gap:2px;">
                            { for results.iter().map(|place| {
                                let store = store.clone();
                                let id = place.id.clone();
                                let onclick = Callback::from(move |_| {
                                    store.dispatch(MapAction::Select(Selection::Place(id.clone())));
                                    store.dispatch(MapAction::SetSearchQuery(String::new()));
                                });
                                html! {
                                    <div {onclick} style="padding:6px 8px; border-radius:6px; cursor:pointer; background:#161b22; border:1px solid #21262d;">
                                        <div style="font-size:13px; font-weight:500;">{ place.name.clone() }</div>
                                        <div style="font-size:11px; color:#8b949e;">{ place.address.clone() }</div>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                }
            } else { html!{} } }
        </div>
    }
}
