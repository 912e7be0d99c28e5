use super::state::ServiceDraft;
use crate::shared::confirm::DeleteConfirm;
use crate::shared::crud_api;
use crate::shared::dom::scroll_to_top;
use crate::shared::form::FormState;
use crate::shared::format::format_price;
use crate::shared::status::{StatusBanners, StatusChannel};
use contracts::domain::a002_service::Service;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ServiceView() -> impl IntoView {
    let (services, set_services) = signal::<Vec<Service>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let status = StatusChannel::new();
    let form = RwSignal::new(FormState::<ServiceDraft>::default());
    let confirm = RwSignal::new(DeleteConfirm::default());

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            match crud_api::fetch_all::<Service>().await {
                Ok(list) => {
                    set_services.set(list);
                    status.error.set(None);
                }
                Err(e) => status.error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        status.clear();
        let current = form.get();
        let input = match current.draft.to_input() {
            Ok(input) => input,
            Err(e) => {
                status.fail(e);
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            let result = match current.edit_target {
                Some(id) => crud_api::update::<Service>(id, &input)
                    .await
                    .map(|_| "Service updated"),
                None => crud_api::create::<Service>(&input)
                    .await
                    .map(|_| "Service created"),
            };
            match result {
                Ok(message) => {
                    status.succeed(message);
                    form.update(|f| f.reset());
                    load();
                }
                Err(e) => status.fail(e),
            }
        });
    };

    let handle_edit = move |service: Service| {
        form.update(|f| f.begin_edit(service.id, ServiceDraft::from_record(&service)));
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
            match crud_api::delete_one::<Service>(id).await {
                Ok(()) => {
                    status.succeed("Service deleted");
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
                fallback=|| view! { <div class="loading">"Loading services..."</div> }
            >
                <div class="card">
                    <h2>{move || if form.get().is_editing() { "Edit Service" } else { "New Service" }}</h2>

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
                            <label for="description">"Description (optional):"</label>
                            <textarea
                                id="description"
                                rows="3"
                                prop:value=move || form.get().draft.description
                                on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="base_price">"Base Price:"</label>
                            <input
                                type="number"
                                id="base_price"
                                required
                                min="0"
                                step="0.01"
                                prop:value=move || form.get().draft.base_price
                                on:input=move |ev| form.update(|f| f.draft.base_price = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="duration_hours">"Duration (hours):"</label>
                            <input
                                type="number"
                                id="duration_hours"
                                required
                                min="0.5"
                                step="0.5"
                                prop:value=move || form.get().draft.duration_hours
                                on:input=move |ev| form.update(|f| f.draft.duration_hours = event_target_value(&ev))
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
                    <h2>"Service List"</h2>
                    <table>
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th>"Base Price"</th>
                                <th>"Duration (h)"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let list = services.get();
                                if list.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" style="text-align: center;">
                                                "No services registered"
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    list.into_iter()
                                        .map(|service| {
                                            let id = service.id;
                                            let record = service.clone();
                                            view! {
                                                <tr>
                                                    <td>{service.id}</td>
                                                    <td>{service.name.clone()}</td>
                                                    <td>{service.description.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{format!("${}", format_price(service.base_price))}</td>
                                                    <td>{service.duration_hours}</td>
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
