//! Stats overview: headline cards, real-time metrics, system status
//!
//! Purely presentational; every value comes from the fixed sample
//! arrays.

use leptos::prelude::*;
use openvote_common::{sample, Trend};

#[component]
pub fn StatsOverview() -> impl IntoView {
    let stats = sample::headline_stats();
    let metrics = sample::realtime_metrics();
    let panels = sample::status_panels();

    view! {
        <div class="stats-overview">
            <div class="stat-grid">
                {stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="card stat-card">
                                <div class="stat-card-header">
                                    <span class="stat-title">{stat.title}</span>
                                    <span class=format!("stat-icon accent-{}", stat.accent.as_str())></span>
                                </div>
                                <div class="stat-value">{stat.value}</div>
                                <p class="stat-change">{stat.change}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card metrics-card">
                <div class="card-header">
                    <h3>"Real-Time Metrics"</h3>
                </div>
                <div class="metrics-grid">
                    {metrics
                        .into_iter()
                        .map(|metric| {
                            let trend_class = match metric.trend {
                                Trend::Up => "trend trend-up",
                                Trend::Down => "trend trend-down",
                            };
                            let trend_glyph = match metric.trend {
                                Trend::Up => "↗",
                                Trend::Down => "↘",
                            };
                            view! {
                                <div class="metric-row">
                                    <div>
                                        <p class="metric-label">{metric.label}</p>
                                        <p class="metric-value">{metric.value}</p>
                                    </div>
                                    <span class=trend_class>{trend_glyph}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="status-grid">
                {panels
                    .into_iter()
                    .map(|panel| {
                        view! {
                            <div class=format!("card status-panel accent-{}", panel.accent.as_str())>
                                <div class="status-panel-head">
                                    <span class="status-name">{panel.name}</span>
                                    <span class="badge">{panel.badge}</span>
                                </div>
                                <p class="status-detail">{panel.detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
