//! Stats Panels
//!
//! Summary cards over the microcredit and collaboration lists, with
//! per-status, risk, category, type and skill breakdowns unless compact.

use leptos::prelude::*;

use civic_core::domain::collaboration::kind_label;
use civic_core::format::euros;
use civic_core::stats::{percent, CollaborationStats, MicrocreditStats};

use crate::store::{use_app_store, AppStateStoreFields};

/// "1.000" with dot thousands separators
fn grouped(n: u64) -> String {
    euros(n as f64).trim_end_matches('€').to_string()
}

#[component]
fn StatCard(title: &'static str, value: String, detail: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <h4>{title}</h4>
            <p class="stat-value">{value}</p>
            <p class="muted">{detail}</p>
        </div>
    }
}

/// Label, count and a bar scaled to the list size
#[component]
fn Breakdown(title: &'static str, rows: Vec<(String, usize)>, total: usize, empty: &'static str) -> impl IntoView {
    let body = if rows.is_empty() {
        view! { <p class="muted">{empty}</p> }.into_any()
    } else {
        rows.into_iter()
            .map(|(label, n)| {
                let width = percent(n, total);
                view! {
                    <div class="breakdown-row">
                        <span>{label}</span>
                        <span>{n}</span>
                        <div class="progress">
                            <div class="progress-bar" style=format!("width: {width}%")></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };
    view! {
        <div class="breakdown">
            <h4>{title}</h4>
            {body}
        </div>
    }
}

#[component]
pub fn MicrocreditStatsView(#[prop(optional)] compact: bool) -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| MicrocreditStats::compute(&store.microcredits().read()));

    move || {
        let s = stats.get();
        let funding = s.funding_percent();
        let cards = view! {
            <div class="stat-cards">
                <StatCard
                    title="Total Financiado"
                    value=euros(s.total_funded)
                    detail=format!("de {} solicitados", euros(s.total_requested))
                />
                <div class="progress">
                    <div class="progress-bar" style=format!("width: {funding}%")></div>
                </div>
                <StatCard
                    title="Total Microcréditos"
                    value=grouped(s.total as u64)
                    detail=format!("{} activos", s.active)
                />
                <StatCard
                    title="Total Inversores"
                    value=grouped(s.total_investors)
                    detail=format!("{} proyectos financiados", s.funded)
                />
                <StatCard
                    title="Tasa de Éxito"
                    value=format!("{}%", s.success_rate())
                    detail=format!("{} completados", s.completed)
                />
                <StatCard
                    title="Interés Medio"
                    value=s.average_interest_label()
                    detail=format!("{} meses de plazo medio", s.average_term_months)
                />
            </div>
        };
        let secondary = (!compact).then(|| {
            let by_status = s
                .by_status
                .iter()
                .filter(|(_, n)| *n > 0)
                .map(|(st, n)| (st.label().to_string(), *n))
                .collect::<Vec<_>>();
            let by_risk = s.by_risk.iter().map(|(r, n)| (r.label().to_string(), *n)).collect::<Vec<_>>();
            view! {
                <div class="stat-breakdowns">
                    <Breakdown title="Por Estado" rows=by_status total=s.total empty="Sin microcréditos" />
                    <Breakdown title="Por Nivel de Riesgo" rows=by_risk total=s.total empty="Sin microcréditos" />
                    <Breakdown
                        title="Top Categorías"
                        rows=s.top_categories.clone()
                        total=s.total
                        empty="No hay categorías disponibles"
                    />
                </div>
            }
        });
        view! {
            <section class="microcredit-stats">
                {cards}
                {secondary}
            </section>
        }
    }
}

#[component]
pub fn CollaborationStatsView(#[prop(optional)] compact: bool) -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| CollaborationStats::compute(&store.collaborations().read()));

    move || {
        let s = stats.get();
        let highlight = |entry: Option<&(String, usize)>, label: fn(&str) -> String| {
            entry.map_or_else(|| "N/A".to_string(), |(name, n)| format!("{} ({n} colaboraciones)", label(name)))
        };
        let cards = view! {
            <div class="stat-cards">
                <StatCard
                    title="Total Colaboraciones"
                    value=grouped(s.total as u64)
                    detail=format!("{} activas", s.active)
                />
                <StatCard
                    title="Total Colaboradores"
                    value=grouped(s.total_collaborators)
                    detail=format!("{} promedio", s.average_collaborators)
                />
                <StatCard
                    title="Tasa de Finalización"
                    value=format!("{}%", s.completion_rate())
                    detail=format!("{} completadas", s.completed)
                />
                <StatCard
                    title="Buscan Colaboradores"
                    value=grouped(s.seeking as u64)
                    detail=format!("{} con cupo completo", s.full)
                />
                <StatCard
                    title="Tipo Más Activo"
                    value=highlight(s.most_active_type(), |k: &str| kind_label(k).to_string())
                    detail=String::new()
                />
                <StatCard
                    title="Habilidad Más Demandada"
                    value=highlight(s.most_popular_skill(), str::to_string)
                    detail=String::new()
                />
            </div>
        };
        let secondary = (!compact).then(|| {
            let by_status = s
                .by_status
                .iter()
                .filter(|(_, n)| *n > 0)
                .map(|(st, n)| (st.label().to_string(), *n))
                .collect::<Vec<_>>();
            let by_type = s
                .by_type
                .iter()
                .map(|(k, n)| (kind_label(k).to_string(), *n))
                .collect::<Vec<_>>();
            view! {
                <div class="stat-breakdowns">
                    <Breakdown title="Por Estado" rows=by_status total=s.total empty="Sin colaboraciones" />
                    <Breakdown title="Por Tipo" rows=by_type total=s.total empty="No hay tipos disponibles" />
                    <Breakdown
                        title="Habilidades Populares"
                        rows=s.top_skills.clone()
                        total=s.total
                        empty="No hay habilidades disponibles"
                    />
                </div>
            }
        });
        view! {
            <section class="collaboration-stats">
                {cards}
                {secondary}
            </section>
        }
    }
}
