//! Search box shared by list views

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Tickets for debounced commits; only the newest ticket may commit
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    /// Ticket for a new pending commit, superseding older ones
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Drop every pending commit
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Committed filter value (after debounce)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// 0 commits every keystroke immediately
    #[prop(optional)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local text, ahead of `value` while the debounce is pending
    let (input_value, set_input_value) = signal(value.get_untracked());

    let gate = StoredValue::new(DebounceGate::default());

    // Parent reset (e.g. datasource switched) clears the box and drops
    // any commit still pending from the previous text
    Effect::new(move |_| {
        if value.get().is_empty() {
            gate.update_value(DebounceGate::cancel);
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if debounce_ms == 0 {
            gate.update_value(DebounceGate::cancel);
            on_change.run(new_value);
            return;
        }

        let mut ticket = 0;
        gate.update_value(|g| ticket = g.schedule());
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if gate.try_with_value(|g| g.is_current(ticket)) == Some(true) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        gate.update_value(DebounceGate::cancel);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input-icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input-clear" on:click=clear_filter title="Clear search">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}
