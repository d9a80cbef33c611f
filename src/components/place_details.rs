use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::app::use_map;
use crate::model::{MapAction, Place, PlaceCategory, Selection};

#[derive(Properties, PartialEq, Clone)]
pub struct PlaceDetailsProps {
    pub place: Place,
}

/// Staged edit form for the selected place. Edits live in local state and
/// reach the store only on Save; reselecting discards them.
#[function_component(PlaceDetails)]
pub fn place_details(props: &PlaceDetailsProps) -> Html {
    let store = use_map();
    let staged = use_state(|| props.place.clone());

    {
        let staged = staged.clone();
        let place = props.place.clone();
        use_effect_with(props.place.id.clone(), move |_| {
            staged.set(place);
            || ()
        });
    }

    let edit = |f: fn(&mut Place, String)| {
        let staged = staged.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut p = (*staged).clone();
            f(&mut p, value);
            staged.set(p);
        })
    };
    let edit_description = {
        let staged = staged.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut p = (*staged).clone();
            p.description = value;
            staged.set(p);
        })
    };
    let edit_category = {
        let staged = staged.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(category) = PlaceCategory::from_key(&value) {
                let mut p = (*staged).clone();
                p.category = category;
                staged.set(p);
            }
        })
    };
    let edit_coord = |f: fn(&mut Place, u32)| {
        let staged = staged.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Ok(v) = value.parse::<u32>() {
                let mut p = (*staged).clone();
                f(&mut p, v);
                staged.set(p);
            }
        })
    };

    let on_save = {
        let store = store.clone();
        let staged = staged.clone();
        Callback::from(move |_| {
            store.dispatch(MapAction::UpdatePlace((*staged).clone()));
        })
    };
    let on_delete = {
        let store = store.clone();
        let id = props.place.id.clone();
        Callback::from(move |_| {
            store.dispatch(MapAction::DeletePlace(id.clone()));
        })
    };
    let on_close = {
        let store = store.clone();
        Callback::from(move |_| {
            store.dispatch(MapAction::Select(Selection::None));
        })
    };

    let field_style = "display:flex; flex-direction:column; gap:4px;";
    let label_style = "font-size:12px; color:#8b949e;";

    html! {
        <div style="display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0; font-size:16px;">{"Place Details"}</h2>
                <button onclick={on_close}>{"Close"}</button>
            </div>
            <div style={field_style}>
                <label style={label_style}>{"Name"}</label>
                <input value={staged.name.clone()} oninput={edit(|p, v| p.name = v)} />
            </div>
            <div style={field_style}>
                <label style={label_style}>{"Type"}</label>
                <select onchange={edit_category}>
                    { for PlaceCategory::ALL.iter().map(|c| html!{
                        <option value={c.key()} selected={*c == staged.category}>{ c.label() }</option>
                    }) }
                </select>
            </div>
            <div style={field_style}>
                <label style={label_style}>{"Address"}</label>
                <input value={staged.address.clone()} oninput={edit(|p, v| p.address = v)} />
            </div>
            <div style={field_style}>
                <label style={label_style}>{"Description"}</label>
                <textarea rows="3" value={staged.description.clone()} oninput={edit_description} />
            </div>
            <div style="display:grid; grid-template-columns:1fr 1fr; gap:8px;">
                <div style={field_style}>
                    <label style={label_style}>{"X Position"}</label>
                    <input type="number" value={staged.x.to_string()} oninput={edit_coord(|p, v| p.x = v)} />
                </div>
                <div style={field_style}>
                    <label style={label_style}>{"Y Position"}</label>
                    <input type="number" value={staged.y.to_string()} oninput={edit_coord(|p, v| p.y = v)} />
                </div>
            </div>
            <div style="display:flex; gap:8px;">
                <button style="flex:1;" onclick={on_save}>{"Save Changes"}</button>
                <button style="color:#f85149;" onclick={on_delete}>{"Delete"}</button>
            </div>
        </div>
    }
}
