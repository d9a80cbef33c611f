use super::legend::LegendRow;
use crate::model::PlaceCategory;
use yew::prelude::*;

#[function_component(LegendPanel)]
pub fn legend_panel() -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:150px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        { for PlaceCategory::ALL.iter().map(|c| html!{ <LegendRow color={c.color()} label={c.label()} /> }) }
        <LegendRow color="#8b949e" label="Lane" line={true} />
        <LegendRow color="#444c56" label="Road" line={true} />
    </div>}
}
