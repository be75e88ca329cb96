//! Microcredit Card
//!
//! Funding progress, terms and the invest panel of one microcredit.

use leptos::prelude::*;

use civic_core::domain::Microcredit;
use civic_core::format::{euros, euros_cents};
use civic_core::widgets::InvestPanel;

use crate::context::{today, use_app_context};

#[component]
pub fn MicrocreditCard(microcredit: Microcredit, has_invested: bool) -> impl IntoView {
    let ctx = use_app_context();
    let minimum = ctx.limits().minimum_investment;
    let microcredit = StoredValue::new(microcredit);
    let (amount, set_amount) = signal(minimum);
    let (touched, set_touched) = signal(false);

    // Panels borrow the item, so each read builds a fresh one
    let panel = move |f: &dyn Fn(&InvestPanel) -> String| {
        microcredit.with_value(|m| {
            let mut panel = InvestPanel::new(m, minimum);
            panel.has_invested = has_invested;
            f(&panel)
        })
    };
    let can_invest = move || microcredit.with_value(|m| InvestPanel::new(m, minimum).can_invest());
    let amount_error = move || {
        touched
            .get()
            .then(|| microcredit.with_value(|m| InvestPanel::new(m, minimum).amount_error(amount.get())))
            .flatten()
    };

    let m = microcredit.get_value();
    let percent = m.funding_percent();

    view! {
        <article class="card microcredit-card">
            <header>
                <h3>{m.title.clone()}</h3>
                <span class=format!("badge risk-{}", m.risk_level.as_str())>{m.risk_level.label()}</span>
            </header>
            <p class="meta">
                {m.borrower.name.clone()}
                {m.borrower.location.clone().map(|l| format!(" · {l}"))}
                " · " {m.category.clone()}
            </p>
            <p>{m.description.clone()}</p>
            <div class="progress">
                <div class="progress-bar" style=format!("width: {percent:.0}%")></div>
            </div>
            <p class="funding">
                {format!("{} de {} ({percent:.0}%)", euros(m.amount_funded), euros(m.amount_requested))}
            </p>
            <dl class="terms">
                <dt>"Interés"</dt>
                <dd>{format!("{}%", m.interest_rate)}</dd>
                <dt>"Plazo"</dt>
                <dd>{format!("{} meses", m.term_months)}</dd>
                <dt>"Estado"</dt>
                <dd>{m.status.label()}</dd>
            </dl>
            {panel(&|p| p.remaining_label().unwrap_or_default())}
            {panel(&|p| p.deadline_label(today()).unwrap_or_default())}
            {panel(&|p| {
                p.expected_return()
                    .map(|r| format!("Rendimiento esperado con {}: {}", euros(p.minimum_investment), euros_cents(r)))
                    .unwrap_or_default()
            })}
            {panel(&|p| p.banner().unwrap_or_default().to_string())}
            <Show when=move || has_invested>
                <p class="invested-note">"Ya has invertido en este microcrédito"</p>
            </Show>
            <Show when=can_invest>
                <div class="invest-form">
                    <input
                        type="number"
                        min=minimum.to_string()
                        step="10"
                        prop:value=move || amount.get().to_string()
                        on:input=move |ev| {
                            set_amount.set(event_target_value(&ev).parse().unwrap_or(0.0));
                            set_touched.set(true);
                        }
                    />
                    {move || amount_error().map(|e| view! { <p class="field-error">{e}</p> })}
                </div>
            </Show>
            <div class="card-actions">
                <button
                    class="invest-btn"
                    disabled=move || !can_invest()
                    on:click=move |_| {
                        set_touched.set(true);
                        let intent = microcredit
                            .with_value(|m| InvestPanel::new(m, minimum).invest(ctx.gate(), amount.get_untracked()));
                        ctx.emit(intent);
                    }
                >
                    {panel(&|p| p.button_label().to_string())}
                </button>
                <button
                    class="contact-btn"
                    on:click=move |_| {
                        ctx.emit(microcredit.with_value(|m| InvestPanel::new(m, minimum).contact_borrower(ctx.gate())));
                    }
                >
                    "Contactar"
                </button>
            </div>
        </article>
    }
}
