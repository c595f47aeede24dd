use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct CompassProps {
    /// Unnormalized heading in degrees; CSS rotation wraps it for us.
    pub angle: f64,
}

/// Directional hint: a ring with an arrow rotated toward the target.
#[function_component(Compass)]
pub(crate) fn compass(props: &CompassProps) -> Html {
    let ring_style = format!("transform: rotate({}deg);", props.angle);

    html! {
        <div class="compass">
            <div class="compass-ring" style={ring_style}>
                <div class="compass-needle"/>
            </div>
        </div>
    }
}
