//! Recent submissions feed
//!
//! Fixed ordered list; the status decides the icon, the badge variant
//! and whether the vote breakdown or the review notice renders. The
//! "View All" button is inert — there is nothing behind it.

use leptos::prelude::*;
use openvote_common::{sample, SubmissionRecord, SubmissionStatus};

fn status_glyph(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Verified => "✔",
        SubmissionStatus::Processing => "⏱",
        SubmissionStatus::Flagged => "⚠",
    }
}

#[component]
pub fn RecentSubmissions() -> impl IntoView {
    let forms = sample::recent_submissions();

    view! {
        <div class="card submissions-card">
            <div class="card-header submissions-header">
                <h3>"Recent Submissions"</h3>
                <span class="badge">"Live Updates"</span>
            </div>
            <div class="card-body">
                <div class="submission-list">
                    {forms
                        .into_iter()
                        .map(|form| view! { <SubmissionItem form=form /> })
                        .collect_view()}
                </div>
                <button class="btn btn-secondary btn-block">"View All Submissions"</button>
            </div>
        </div>
    }
}

#[component]
fn SubmissionItem(form: SubmissionRecord) -> impl IntoView {
    let status = form.status;

    view! {
        <div class="submission-item">
            <div class="submission-head">
                <div class="submission-id">
                    <span class=format!("status-icon status-{}", status.as_str())>
                        {status_glyph(status)}
                    </span>
                    <span class="station-code">{form.polling_station}</span>
                    <span class=format!("badge badge-{}", status.as_str())>{status.label()}</span>
                </div>
                <span class="submitted-at">{form.submitted}</span>
            </div>

            <p class="submission-place">{format!("{}, {}", form.constituency, form.county)}</p>

            <Show when=move || status.shows_vote_breakdown()>
                <div class="vote-grid">
                    <div class="vote-cell accent-blue">
                        <p class="vote-count">{form.votes.candidate_a}</p>
                        <p class="vote-name">"Candidate A"</p>
                    </div>
                    <div class="vote-cell accent-green">
                        <p class="vote-count">{form.votes.candidate_b}</p>
                        <p class="vote-name">"Candidate B"</p>
                    </div>
                    <div class="vote-cell accent-purple">
                        <p class="vote-count">{form.votes.candidate_c}</p>
                        <p class="vote-name">"Candidate C"</p>
                    </div>
                </div>
            </Show>

            <Show when=move || status.needs_review()>
                <div class="review-notice">
                    <span class="status-icon status-flagged">"⚠"</span>
                    "Requires manual review"
                </div>
            </Show>
        </div>
    }
}
