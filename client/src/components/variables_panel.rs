//! Editor for workflow variables with a live interpolation preview.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::hooks::use_variables;
use crate::providers::provider_error;

#[component]
pub fn VariablesPanel() -> impl IntoView {
    let vars = match use_variables() {
        Ok(vars) => vars,
        Err(err) => return provider_error(&err),
    };
    let name = RwSignal::new(String::new());
    let value = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let preview = RwSignal::new("Hello {{user}}".to_owned());

    let on_save = move |_| match vars.set_var(&name.get_untracked(), &value.get_untracked()) {
        Ok(()) => {
            error.set(None);
            name.set(String::new());
            value.set(String::new());
        }
        Err(err) => error.set(Some(err.to_string())),
    };

    view! {
        <div class="variables-panel">
            <table class="variables-panel__table">
                <tbody>
                {move || {
                    vars.state()
                        .vars
                        .into_iter()
                        .map(|(key, val)| {
                            let remove_key = key.clone();
                            view! {
                                <tr>
                                    <td class="variables-panel__name">{key}</td>
                                    <td>{val}</td>
                                    <td>
                                        <button class="btn" on:click=move |_| vars.remove_var(&remove_key)>"×"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
                </tbody>
            </table>
            <div class="variables-panel__add">
                <input
                    placeholder="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    placeholder="value"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button class="btn" on:click=on_save>"Save"</button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="variables-panel__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <label class="variables-panel__preview">
                <input prop:value=move || preview.get() on:input=move |ev| preview.set(event_target_value(&ev))/>
                <output>{move || vars.interpolate(&preview.get())}</output>
            </label>
        </div>
    }
    .into_any()
}
