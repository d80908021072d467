//! Top-level application component
//!
//! Owns the dashboard/upload tab state and composes the page chrome
//! (header, nav, footer) around the child components. No data flows
//! between tabs; each child owns its own local state.

use crate::components::{
    map_dashboard::MapDashboard, recent_submissions::RecentSubmissions,
    stats_overview::StatsOverview, upload_form::UploadForm,
};
use leptos::prelude::*;

/// Which top-level pane is shown
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Dashboard,
    Upload,
}

#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(ActiveTab::Dashboard);

    let tab_class = move |tab: ActiveTab| {
        if active_tab.get() == tab {
            "nav-tab active"
        } else {
            "nav-tab"
        }
    };

    view! {
        <div class="page">
            <header class="header">
                <div class="header-inner">
                    <div class="brand">
                        <div class="brand-mark">"🛡"</div>
                        <div>
                            <h1>"OpenVote Kenya"</h1>
                            <p class="tagline">"Blockchain-Powered Form 34A Verification"</p>
                        </div>
                    </div>
                    <span class="badge badge-live">
                        <span class="live-dot"></span>
                        "Live System"
                    </span>
                </div>
            </header>

            <nav class="nav-tabs">
                <button
                    class=move || tab_class(ActiveTab::Dashboard)
                    on:click=move |_| set_active_tab.set(ActiveTab::Dashboard)
                >
                    "Dashboard"
                </button>
                <button
                    class=move || tab_class(ActiveTab::Upload)
                    on:click=move |_| set_active_tab.set(ActiveTab::Upload)
                >
                    "Upload Form 34A"
                </button>
            </nav>

            <main class="content">
                <Show when=move || active_tab.get() == ActiveTab::Dashboard>
                    <section class="dashboard">
                        <div class="hero">
                            <h2>"Real-Time Election Transparency"</h2>
                            <p>
                                "Citizens across Kenya are uploading and verifying Form 34A \
                                 documents using blockchain technology to ensure election \
                                 integrity and transparency."
                            </p>
                        </div>

                        <StatsOverview />

                        <div class="dashboard-grid">
                            <div class="card map-card">
                                <div class="card-header">
                                    <h3>"Form 34A Submissions Across Kenya"</h3>
                                    <p class="card-subtitle">
                                        "Interactive map showing verified form submissions by location"
                                    </p>
                                </div>
                                <div class="card-body">
                                    <MapDashboard />
                                </div>
                            </div>
                            <RecentSubmissions />
                        </div>
                    </section>
                </Show>

                <Show when=move || active_tab.get() == ActiveTab::Upload>
                    <section class="upload-pane">
                        <div class="hero">
                            <h2>"Upload Form 34A"</h2>
                            <p>
                                "Help ensure election transparency by uploading your polling \
                                 station's Form 34A. All submissions are verified and anchored \
                                 on the blockchain."
                            </p>
                        </div>
                        <UploadForm />
                    </section>
                </Show>
            </main>

            <footer class="footer">
                <div class="footer-grid">
                    <div>
                        <h3>"OpenVote Kenya"</h3>
                        <p>
                            "Empowering citizens with blockchain technology to ensure \
                             transparent and verifiable elections."
                        </p>
                    </div>
                    <div>
                        <h3>"Features"</h3>
                        <ul>
                            <li>"Blockchain verification"</li>
                            <li>"Real-time tallying"</li>
                            <li>"GPS-based validation"</li>
                            <li>"Open source transparency"</li>
                        </ul>
                    </div>
                    <div>
                        <h3>"Resources"</h3>
                        <ul>
                            <li>"API Documentation"</li>
                            <li>"Verification Guide"</li>
                            <li>"Smart Contract"</li>
                            <li>"Community Forum"</li>
                        </ul>
                    </div>
                </div>
                <p class="footer-note">
                    "© 2024 OpenVote Kenya. Built for transparency and democracy."
                </p>
            </footer>
        </div>
    }
}
