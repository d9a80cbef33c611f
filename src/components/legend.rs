use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: &'static str,
    /// Square swatch for area markers (places), line swatch for connectors.
    #[prop_or(false)]
    pub line: bool,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let swatch = if props.line {
        format!(
            "display:inline-block; width:14px; height:4px; border-radius:2px; background:{};",
            props.color
        )
    } else {
        format!(
            "display:inline-block; width:12px; height:12px; border:1px solid #30363d; border-radius:3px; background:{};",
            props.color
        )
    };
    html! {
        <div style="display:flex; align-items:center; gap:8px; margin:3px 0; font-size:12px;">
            <span style={swatch}></span>
            <span>{ props.label }</span>
        </div>
    }
}
