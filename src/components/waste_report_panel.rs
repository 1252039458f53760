//! Waste Report Panel Component
//!
//! Structured waste figures for the selected menu and scope.

use dashboard_sync::{ItemWaste, WasteReport};
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

const TOP_N: usize = 3;

#[component]
pub fn WasteReportPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="card waste-report">
            <h5>"Waste Report"</h5>
            {move || {
                let view = store.report().get();
                if view.loading {
                    return view! { <div class="report-loading">"Loading reports..."</div> }.into_any();
                }
                if let Some(error) = view.error {
                    return view! { <div class="report-error">{error}</div> }.into_any();
                }
                match view.report.filter(WasteReport::has_data) {
                    Some(report) => view! { <ReportBody report=report /> }.into_any(),
                    None => view! {
                        <div class="report-empty">"No waste data available for this period."</div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ReportBody(report: WasteReport) -> impl IntoView {
    let most_wasted = report.most_wasted(TOP_N).to_vec();
    let least_wasteful = report.least_wasteful(TOP_N);

    view! {
        <div class="report-totals">
            <div class="stat">
                <span class="stat-label">"Total Waste"</span>
                <span class="stat-value">{report.total_waste}</span>
            </div>
            <div class="stat">
                <span class="stat-label">"Items Tracked"</span>
                <span class="stat-value">{report.individual_waste.len()}</span>
            </div>
            <div class="stat">
                <span class="stat-label">"Most Wasted"</span>
                <span class="stat-value">
                    {report.individual_waste.first().map(|w| w.item.clone()).unwrap_or_else(|| "-".to_string())}
                </span>
            </div>
        </div>
        <div class="report-lists">
            <WasteList title="Top Wasted Items" entries=most_wasted />
            <WasteList title="Least Wasteful Items" entries=least_wasteful />
        </div>
    }
}

#[component]
fn WasteList(title: &'static str, entries: Vec<ItemWaste>) -> impl IntoView {
    view! {
        <div class="waste-list">
            <h6>{title}</h6>
            <ol>
                {entries.into_iter().map(|entry| view! {
                    <li>
                        <span class="waste-item">{entry.item}</span>
                        <span class="waste-detail">
                            {format!(
                                "{} wasted, {} leftover ({} total)",
                                entry.wasted, entry.leftovers, entry.total_waste
                            )}
                        </span>
                    </li>
                }).collect_view()}
            </ol>
        </div>
    }
}
