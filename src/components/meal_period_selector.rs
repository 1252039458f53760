//! Meal Period Selector Component
//!
//! Toggle buttons for breakfast / lunch / dinner.

use dashboard_sync::MealPeriod;
use leptos::prelude::*;

fn label(period: MealPeriod) -> &'static str {
    match period {
        MealPeriod::Breakfast => "Breakfast",
        MealPeriod::Lunch => "Lunch",
        MealPeriod::Dinner => "Dinner",
    }
}

#[component]
pub fn MealPeriodSelector(
    current: ReadSignal<MealPeriod>,
    on_change: impl Fn(MealPeriod) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {MealPeriod::ALL.iter().map(|period| {
                let period = *period;
                view! {
                    <button
                        type="button"
                        class=move || if current.get() == period { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(period)
                    >
                        {label(period)}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
