use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Cleaning Contracts Admin"</span>
            <A attr:class="navbar__link" href="/">"Companies"</A>
            <A attr:class="navbar__link" href="/services">"Services"</A>
            <A attr:class="navbar__link" href="/contracts">"Contracts"</A>
        </nav>
    }
}
