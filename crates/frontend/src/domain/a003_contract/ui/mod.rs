use super::state::{company_name, service_name, ContractDraft, Field};
use crate::shared::confirm::DeleteConfirm;
use crate::shared::crud_api;
use crate::shared::dom::scroll_to_top;
use crate::shared::form::FormState;
use crate::shared::format::format_price;
use crate::shared::status::{StatusBanners, StatusChannel};
use contracts::domain::a001_company::Company;
use contracts::domain::a002_service::Service;
use contracts::domain::a003_contract::{Contract, ContractStatus};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ContractView() -> impl IntoView {
    let (contracts, set_contracts) = signal::<Vec<Contract>>(Vec::new());
    let (companies, set_companies) = signal::<Vec<Company>>(Vec::new());
    let (services, set_services) = signal::<Vec<Service>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let status = StatusChannel::new();
    let form = RwSignal::new(FormState::<ContractDraft>::default());
    let confirm = RwSignal::new(DeleteConfirm::default());

    // The three list fetches run concurrently. Collections that loaded
    // are applied even when a sibling fetch failed; the banner carries
    // the first failure.
    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            let (contracts_res, companies_res, services_res) = futures::join!(
                crud_api::fetch_all::<Contract>(),
                crud_api::fetch_all::<Company>(),
                crud_api::fetch_all::<Service>(),
            );

            let mut first_error: Option<String> = None;
            match contracts_res {
                Ok(list) => set_contracts.set(list),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
            match companies_res {
                Ok(list) => set_companies.set(list),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
            match services_res {
                Ok(list) => set_services.set(list),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }

            status.error.set(first_error);
            set_loading.set(false);
        });
    };

    let change_field = move |field: Field, value: String| {
        let loaded_services = services.get();
        form.update(|f| f.draft.apply_change(field, value, &loaded_services));
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
                Some(id) => crud_api::update::<Contract>(id, &input)
                    .await
                    .map(|_| "Contract updated"),
                None => crud_api::create::<Contract>(&input)
                    .await
                    .map(|_| "Contract created"),
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

    let handle_edit = move |contract: Contract| {
        form.update(|f| f.begin_edit(contract.id, ContractDraft::from_record(&contract)));
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
            match crud_api::delete_one::<Contract>(id).await {
                Ok(()) => {
                    status.succeed("Contract deleted");
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
                fallback=|| view! { <div class="loading">"Loading contracts..."</div> }
            >
                <div class="card">
                    <h2>{move || if form.get().is_editing() { "Edit Contract" } else { "New Contract" }}</h2>

                    <StatusBanners status=status />

                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label for="company_id">"Company:"</label>
                            <select
                                id="company_id"
                                required
                                prop:value=move || form.get().draft.company_id
                                on:change=move |ev| change_field(Field::CompanyId, event_target_value(&ev))
                            >
                                <option value="">"Select a company"</option>
                                {move || companies.get().into_iter().map(|company| view! {
                                    <option value=company.id.to_string()>{company.name}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="service_id">"Service:"</label>
                            <select
                                id="service_id"
                                required
                                prop:value=move || form.get().draft.service_id
                                on:change=move |ev| change_field(Field::ServiceId, event_target_value(&ev))
                            >
                                <option value="">"Select a service"</option>
                                {move || services.get().into_iter().map(|service| view! {
                                    <option value=service.id.to_string()>
                                        {format!("{} - ${}", service.name, format_price(service.base_price))}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="start_date">"Start Date:"</label>
                            <input
                                type="date"
                                id="start_date"
                                required
                                prop:value=move || form.get().draft.start_date
                                on:input=move |ev| change_field(Field::StartDate, event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="end_date">"End Date (optional):"</label>
                            <input
                                type="date"
                                id="end_date"
                                prop:value=move || form.get().draft.end_date
                                on:input=move |ev| change_field(Field::EndDate, event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="status">"Status:"</label>
                            <select
                                id="status"
                                required
                                prop:value=move || form.get().draft.status
                                on:change=move |ev| change_field(Field::Status, event_target_value(&ev))
                            >
                                {ContractStatus::ALL.iter().map(|s| view! {
                                    <option value=s.as_str()>{s.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="final_price">"Final Price:"</label>
                            <input
                                type="number"
                                id="final_price"
                                required
                                min="0"
                                step="0.01"
                                prop:value=move || form.get().draft.final_price
                                on:input=move |ev| change_field(Field::FinalPrice, event_target_value(&ev))
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
                    <h2>"Contract List"</h2>
                    <table>
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Company"</th>
                                <th>"Service"</th>
                                <th>"Start Date"</th>
                                <th>"End Date"</th>
                                <th>"Status"</th>
                                <th>"Final Price"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let list = contracts.get();
                                let companies_list = companies.get();
                                let services_list = services.get();
                                if list.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="8" style="text-align: center;">
                                                "No contracts registered"
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    list.into_iter()
                                        .map(|contract| {
                                            let id = contract.id;
                                            let record = contract.clone();
                                            view! {
                                                <tr>
                                                    <td>{contract.id}</td>
                                                    <td>{company_name(&companies_list, contract.company_id)}</td>
                                                    <td>{service_name(&services_list, contract.service_id)}</td>
                                                    <td>{contract.start_date.to_string()}</td>
                                                    <td>{contract.end_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                                    <td>{contract.status.label()}</td>
                                                    <td>{format!("${}", format_price(contract.final_price))}</td>
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
