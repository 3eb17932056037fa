//! Not Found Page

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <h1 class="title container__title">"PAGE NOT FOUND"</h1> }
}
