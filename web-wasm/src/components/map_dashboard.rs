//! County heat map
//!
//! Fixed markers positioned by percentage offsets over a simplified
//! Kenya silhouette. Marker color and size come from the submission
//! count buckets; clicking a marker reveals that county's detail panel.

use leptos::prelude::*;
use openvote_common::{sample, total_submissions, CountyMarker, HeatBucket};

#[component]
pub fn MapDashboard() -> impl IntoView {
    let counties = StoredValue::new(sample::county_markers());
    let total = counties.with_value(|c| total_submissions(c));
    let (selected, set_selected) = signal(None::<String>);

    let selected_county = move || -> Option<CountyMarker> {
        let name = selected.get()?;
        counties.with_value(|c| c.iter().find(|m| m.name == name).cloned())
    };

    view! {
        <div class="map-dashboard">
            <div class="map-canvas">
                // Simplified Kenya outline
                <svg viewBox="0 0 400 300" class="map-outline">
                    <path
                        d="M80,50 L320,50 L340,80 L350,120 L340,180 L320,220 L280,250 L120,250 L80,220 L60,180 L50,120 L60,80 Z"
                        fill="#f9fafb"
                        stroke="#e5e7eb"
                        stroke-width="2"
                    />
                </svg>

                <For
                    each=move || counties.get_value()
                    key=|county| county.name.clone()
                    children=move |county| {
                        let bucket = HeatBucket::for_submissions(county.submissions);
                        let name = county.name.clone();
                        let tooltip = format!("{}: {} forms", county.name, county.submissions);
                        view! {
                            <div
                                class="map-marker"
                                style=format!("left: {}%; top: {}%;", county.x_pct, county.y_pct)
                                on:click=move |_| set_selected.set(Some(name.clone()))
                            >
                                <div
                                    class=format!("marker-dot {}", bucket.css_class())
                                    style=format!(
                                        "width: {size}px; height: {size}px;",
                                        size = bucket.marker_size_px()
                                    )
                                ></div>
                                <span class="marker-tooltip">{tooltip}</span>
                            </div>
                        }
                    }
                />
            </div>

            <div class="map-legend">
                <div class="legend-scale">
                    <span class="legend-title">"Submissions:"</span>
                    {HeatBucket::ALL
                        .iter()
                        .map(|bucket| {
                            view! {
                                <span class="legend-entry">
                                    <span
                                        class=format!("marker-dot {}", bucket.css_class())
                                        style=format!(
                                            "width: {size}px; height: {size}px;",
                                            size = bucket.marker_size_px()
                                        )
                                    ></span>
                                    <span class="legend-range">{bucket.legend_range()}</span>
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="badge badge-total">{format!("{} Total Forms", total)}</span>
            </div>

            {move || {
                selected_county().map(|county| {
                    view! {
                        <div class="county-detail">
                            <h4>{format!("{} County", county.name)}</h4>
                            <div class="county-detail-grid">
                                <div>
                                    <span class="detail-label">"Total Submissions:"</span>
                                    <span class="detail-value">{county.submissions}</span>
                                </div>
                                <div>
                                    <span class="detail-label">"Verified:"</span>
                                    <span class="detail-value verified">{county.verified}</span>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
