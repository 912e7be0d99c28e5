use super::state::CompanyDraft;
use crate::shared::confirm::DeleteConfirm;
use crate::shared::crud_api;
use crate::shared::dom::scroll_to_top;
use crate::shared::form::FormState;
use crate::shared::status::{StatusBanners, StatusChannel};
use contracts::domain::a001_company::Company;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CompanyView() -> impl IntoView {
    let (companies, set_companies) = signal::<Vec<Company>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let status = StatusChannel::new();
    let form = RwSignal::new(FormState::<CompanyDraft>::default());
    let confirm = RwSignal::new(DeleteConfirm::default());

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            match crud_api::fetch_all::<Company>().await {
                Ok(list) => {
                    set_companies.set(list);
                    status.error.set(None);
                }
                // keep whatever was on screen; only the banner changes
                Err(e) => status.error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.clear();
        let current = form.get();
        let input = current.draft.to_input();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match current.edit_target {
                Some(id) => crud_api::update::<Company>(id, &input)
                    .await
                    .map(|_| "Company updated"),
                None => crud_api::create::<Company>(&input)
                    .await
                    .map(|_| "Company created"),
            };
            match result {
                Ok(message) => {
                    status.succeed(message);
                    form.update(|f| f.reset());
                    load();
                }
                // draft and edit target stay put so the user can retry
                Err(e) => status.fail(e),
            }
        });
    };

    let handle_edit = move |company: Company| {
        form.update(|f| f.begin_edit(company.id, CompanyDraft::from_record(&company)));
        scroll_to_top();
    };

    let handle_cancel = move |_| {
        form.update(|f| f.reset());
    };

    let handle_delete = move |id: EntityId| {
        let mut confirmed = false;
        confirm.update(|c| confirmed = c.take_confirmed(id));
        if !confirmed {
            return;
        }
        status.clear();
        wasm_bindgen_futures::spawn_local(async move {
            match crud_api::delete_one::<Company>(id).await {
                Ok(()) => {
                    status.succeed("Company deleted");
                    load();
                }
                Err(e) => status.fail(e),
            }
        });
    };

    load();

    view! {
        <div class="container">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading companies..."</div> }
            >
                <div class="card">
                    <h2>{move || if form.get().is_editing() { "Edit Company" } else { "New Company" }}</h2>

                    <StatusBanners status=status />

                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label for="name">"Name:"</label>
                            <input
                                type="text"
                                id="name"
                                required
                                prop:value=move || form.get().draft.name
                                on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="address">"Address:"</label>
                            <input
                                type="text"
                                id="address"
                                required
                                prop:value=move || form.get().draft.address
                                on:input=move |ev| form.update(|f| f.draft.address = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="phone">"Phone:"</label>
                            <input
                                type="tel"
                                id="phone"
                                required
                                prop:value=move || form.get().draft.phone
                                on:input=move |ev| form.update(|f| f.draft.phone = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="email">"Email:"</label>
                            <input
                                type="email"
                                id="email"
                                required
                                prop:value=move || form.get().draft.email
                                on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                            />
                        </div>

                        <div class="button-group">
                            <button type="submit" class="btn btn-primary">
                                {move || if form.get().is_editing() { "Update" } else { "Create" }}
                            </button>
                            <Show when=move || form.get().is_editing()>
                                <button type="button" class="btn btn-secondary" on:click=handle_cancel>
                                    "Cancel"
                                </button>
                            </Show>
                        </div>
                    </form>
                </div>

                <div class="card">
                    <h2>"Company List"</h2>
                    <table>
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Address"</th>
                                <th>"Phone"</th>
                                <th>"Email"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let list = companies.get();
                                if list.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" style="text-align: center;">
                                                "No companies registered"
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    list.into_iter()
                                        .map(|company| {
                                            let id = company.id;
                                            let record = company.clone();
                                            view! {
                                                <tr>
                                                    <td>{company.id}</td>
                                                    <td>{company.name.clone()}</td>
                                                    <td>{company.address.clone()}</td>
                                                    <td>{company.phone.clone()}</td>
                                                    <td>{company.email.clone()}</td>
                                                    <td>
                                                        <Show
                                                            when=move || confirm.get().is_pending(id)
                                                            fallback=move || {
                                                                let record = record.clone();
                                                                view! {
                                                                    <button
                                                                        class="btn btn-edit"
                                                                        on:click=move |_| handle_edit(record.clone())
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-danger"
                                                                        on:click=move |_| confirm.update(|c| c.request(id))
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                }
                                                            }
                                                        >
                                                            <button
                                                                class="btn btn-danger"
                                                                on:click=move |_| handle_delete(id)
                                                            >
                                                                "Confirm"
                                                            </button>
                                                            <button
                                                                class="btn btn-secondary"
                                                                on:click=move |_| confirm.update(|c| c.cancel())
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
