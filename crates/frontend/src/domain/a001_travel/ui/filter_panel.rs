use contracts::domain::a001_travel::{Amenity, TimeOfDay};
use leptos::prelude::*;

use super::super::filters::{SortKey, TravelFilter};
use crate::shared::format::format_inr;

/// Filter and sort controls shared by every results list.
///
/// `bounds` is the price range of the unfiltered list; the slider is hidden
/// when the list is empty.
#[component]
#[allow(non_snake_case)]
pub fn FilterPanel(
    filter: RwSignal<TravelFilter>,
    bounds: Option<(f64, f64)>,
    operators: Vec<String>,
    #[prop(optional)] amenities: Vec<Amenity>,
    #[prop(optional)] show_stops: bool,
    #[prop(optional)] show_refundable: bool,
) -> impl IntoView {
    let price_slider = bounds.map(|(min, max)| {
        view! {
            <label class="filters__group">
                <span>{move || format!(
                    "Max price: {}",
                    format_inr(filter.with(|f| f.max_price.unwrap_or(max)))
                )}</span>
                <input
                    type="range"
                    min=min.floor().to_string()
                    max=max.ceil().to_string()
                    step="50"
                    prop:value=move || filter.with(|f| f.max_price.unwrap_or(max)).to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse::<f64>().ok();
                        filter.update(|f| f.max_price = value.filter(|v| *v < max));
                    }
                />
            </label>
        }
    });

    view! {
        <aside class="filters">
            <div class="filters__group">
                <span>"Sort by"</span>
                <select on:change=move |ev| {
                    let key = SortKey::from_code(&event_target_value(&ev));
                    filter.update(|f| f.sort = key);
                }>
                    {SortKey::all().into_iter().map(|key| view! {
                        <option value=key.code() prop:selected=move || filter.with(|f| f.sort == key)>
                            {key.label()}
                        </option>
                    }).collect_view()}
                </select>
                <label class="filters__check">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.descending)
                        on:change=move |ev| filter.update(|f| f.descending = event_target_checked(&ev))
                    />
                    "Descending"
                </label>
            </div>

            {price_slider}

            {show_stops.then(|| view! {
                <div class="filters__group">
                    <span>"Stops"</span>
                    {[(None, "Any"), (Some(0u8), "Non-stop"), (Some(1u8), "Up to 1")].into_iter().map(|(stops, label)| view! {
                        <button
                            class=move || if filter.with(|f| f.max_stops == stops) { "chip chip--active" } else { "chip" }
                            on:click=move |_| filter.update(|f| f.max_stops = stops)
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </div>
            })}

            <div class="filters__group">
                <span>"Departure"</span>
                {TimeOfDay::all().into_iter().map(|time| view! {
                    <button
                        class=move || if filter.with(|f| f.times.contains(&time)) { "chip chip--active" } else { "chip" }
                        on:click=move |_| filter.update(|f| f.toggle_time(time))
                    >
                        {time.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="filters__group">
                <span>"Rating"</span>
                {[(None, "Any"), (Some(3.5f32), "3.5+"), (Some(4.0f32), "4.0+"), (Some(4.5f32), "4.5+")].into_iter().map(|(rating, label)| view! {
                    <button
                        class=move || if filter.with(|f| f.min_rating == rating) { "chip chip--active" } else { "chip" }
                        on:click=move |_| filter.update(|f| f.min_rating = rating)
                    >
                        {label}
                    </button>
                }).collect_view()}
            </div>

            {(!operators.is_empty()).then(|| view! {
                <div class="filters__group">
                    <span>"Operators"</span>
                    {operators.into_iter().map(|operator| {
                        let name = operator.clone();
                        let key = operator.clone();
                        view! {
                            <label class="filters__check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filter.with(|f| f.operators.contains(&key))
                                    on:change=move |_| filter.update(|f| f.toggle_operator(&operator))
                                />
                                {name}
                            </label>
                        }
                    }).collect_view()}
                </div>
            })}

            {(!amenities.is_empty()).then(|| view! {
                <div class="filters__group">
                    <span>"Amenities"</span>
                    {amenities.into_iter().map(|amenity| view! {
                        <label class="filters__check">
                            <input
                                type="checkbox"
                                prop:checked=move || filter.with(|f| f.amenities.contains(&amenity))
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    filter.update(|f| {
                                        f.amenities.retain(|a| *a != amenity);
                                        if on {
                                            f.amenities.push(amenity);
                                        }
                                    });
                                }
                            />
                            {amenity.label()}
                        </label>
                    }).collect_view()}
                </div>
            })}

            {show_refundable.then(|| view! {
                <label class="filters__check">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.refundable_only)
                        on:change=move |ev| filter.update(|f| f.refundable_only = event_target_checked(&ev))
                    />
                    "Refundable only"
                </label>
            })}

            <button class="button button--ghost" on:click=move |_| filter.set(TravelFilter {
                sort: filter.with_untracked(|f| f.sort),
                ..TravelFilter::default()
            })>
                "Reset filters"
            </button>
        </aside>
    }
}
