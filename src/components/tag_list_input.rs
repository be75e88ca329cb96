//! Tag List Input
//!
//! Chips for the current entries plus a text box. Enter or comma adds,
//! comma-separated pastes add one entry each, Backspace on an empty box
//! drops the last chip. Optional suggestions complete with Tab.

use leptos::prelude::*;

/// Query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let target = target.to_lowercase();
    let mut target_chars = target.chars();
    query
        .to_lowercase()
        .chars()
        .all(|q| target_chars.by_ref().any(|c| c == q))
}

/// Text after the last comma
fn current_segment(input: &str) -> &str {
    input.rsplit(',').next().unwrap_or("").trim()
}

#[component]
pub fn TagListInput(
    label: &'static str,
    #[prop(into)] items: Signal<Vec<String>>,
    #[prop(into)] counter_label: Signal<String>,
    #[prop(into)] is_full: Signal<bool>,
    /// Called once per entry
    #[prop(into)]
    on_add: Callback<String>,
    #[prop(into)] on_remove: Callback<usize>,
    #[prop(optional)] suggestions: &'static [&'static str],
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    let matches = move || {
        let input = input_value.get();
        let segment = current_segment(&input);
        if segment.is_empty() {
            return Vec::new();
        }
        let taken = items.get();
        suggestions
            .iter()
            .filter(|s| fuzzy_match(segment, s) && !taken.iter().any(|t| t.as_str() == **s))
            .take(5)
            .copied()
            .collect::<Vec<_>>()
    };

    let commit = move |raw: String| {
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            on_add.run(part.to_string());
        }
        set_input_value.set(String::new());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" | "," => {
            ev.prevent_default();
            commit(input_value.get_untracked());
        }
        "Tab" => {
            if let Some(first) = matches().first() {
                ev.prevent_default();
                commit(first.to_string());
            }
        }
        "Backspace" if input_value.get_untracked().is_empty() => {
            let len = items.get_untracked().len();
            if len > 0 {
                on_remove.run(len - 1);
            }
        }
        _ => {}
    };

    view! {
        <div class="form-field tag-list-input">
            <label>{label} " " <span class="tag-counter">{move || counter_label.get()}</span></label>
            <div class="tag-chips">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, tag)| {
                            view! {
                                <span class="tag-chip">
                                    {tag}
                                    <button
                                        type="button"
                                        class="tag-chip-remove"
                                        aria-label="Eliminar"
                                        on:click=move |_| on_remove.run(index)
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <input
                type="text"
                placeholder=placeholder
                disabled=move || is_full.get()
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    if value.contains(',') {
                        commit(value);
                    } else {
                        set_input_value.set(value);
                    }
                }
                on:keydown=on_keydown
            />
            <Show when=move || !matches().is_empty()>
                <ul class="tag-suggestions">
                    {move || {
                        matches()
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <li on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        commit(s.to_string());
                                    }>{s}</li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("dso", "Diseño"));
        assert!(fuzzy_match("", "Rust"));
        assert!(!fuzzy_match("tsr", "Rust"));
    }

    #[test]
    fn test_current_segment() {
        assert_eq!(current_segment("rust, wa"), "wa");
        assert_eq!(current_segment("rust,"), "");
    }
}
