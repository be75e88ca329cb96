//! Step Indicator
//!
//! Numbered step titles with completed/current/pending state and a progress bar.
//! Clicking a step asks the parent to jump there.

use leptos::prelude::*;

use civic_core::{SteppedForm, StepStatus};

#[component]
pub fn StepIndicator<F>(
    form: RwSignal<F>,
    read: fn(&F) -> &SteppedForm,
    #[prop(into)] on_jump: Callback<usize>,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    let steps = move || {
        form.with(|f| {
            let wizard = read(f);
            wizard
                .steps()
                .iter()
                .enumerate()
                .map(|(i, step)| (i, step.title.clone(), wizard.step_status(i)))
                .collect::<Vec<_>>()
        })
    };
    let progress = move || form.with(|f| read(f).progress());

    view! {
        <div class="step-indicator">
            <div class="step-progress">
                <div class="step-progress-bar" style=move || format!("width: {:.0}%", progress())></div>
            </div>
            <ol class="step-list">
                {move || {
                    steps()
                        .into_iter()
                        .map(|(index, title, status)| {
                            let marker = match status {
                                StepStatus::Completed => "✓".to_string(),
                                _ => (index + 1).to_string(),
                            };
                            view! {
                                <li class=format!("step step-{}", status.as_str())>
                                    <button
                                        class="step-btn"
                                        aria-current={(status == StepStatus::Current).then_some("step")}
                                        on:click=move |_| on_jump.run(index)
                                    >
                                        <span class="step-marker">{marker}</span>
                                        <span class="step-title">{title}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </div>
    }
}
