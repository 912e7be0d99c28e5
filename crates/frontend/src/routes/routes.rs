use crate::domain::a001_company::ui::CompanyView;
use crate::domain::a002_service::ui::ServiceView;
use crate::domain::a003_contract::ui::ContractView;
use crate::layout::navbar::Navbar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| view! { <div class="container">"Page not found"</div> }>
                    <Route path=path!("/") view=CompanyView />
                    <Route path=path!("/services") view=ServiceView />
                    <Route path=path!("/contracts") view=ContractView />
                </Routes>
            </main>
        </Router>
    }
}
