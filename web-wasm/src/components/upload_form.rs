//! Upload form: three-step Form 34A wizard
//!
//! Thin view over `openvote_common::UploadWizard`. The component wires
//! browser concerns (file picker, camera capture, one-shot geolocation,
//! the simulated backend) into the state machine's transitions; all
//! gating rules live in the model.

use crate::backend::{SimulatedBackend, SubmissionBackend};
use crate::geolocation;
use gloo::console;
use leptos::prelude::*;
use openvote_common::{sample, UploadWizard, WizardStep};
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

/// Dismissable advisory shown after the geolocation attempt
#[derive(Clone)]
struct Notice {
    title: &'static str,
    body: &'static str,
    variant: &'static str,
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let wizard = RwSignal::new(UploadWizard::new());
    let (notice, set_notice) = signal(None::<Notice>);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    // Store the image handle, then try for a one-shot GPS fix. Denial
    // is advisory only and never blocks the flow.
    let attach = move |file: web_sys::File| {
        wizard.update(|w| {
            if let Err(e) = w.attach_image(file.name()) {
                console::warn!("image attach rejected:", e.to_string());
            }
        });
        geolocation::request_position(
            move |fix| {
                console::log!("gps fix captured:", fix.to_string());
                wizard.update(|w| w.set_gps(fix));
                set_notice.set(Some(Notice {
                    title: "Location captured",
                    body: "GPS coordinates have been recorded for verification.",
                    variant: "notice-ok",
                }));
            },
            move |message| {
                console::warn!("gps unavailable:", message);
                set_notice.set(Some(Notice {
                    title: "Location access denied",
                    body: "GPS coordinates are recommended for verification.",
                    variant: "notice-warn",
                }));
            },
        );
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = match ev.target() {
            Some(target) => target.unchecked_into(),
            None => return,
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            attach(file);
        }
    };

    let on_pick_file = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    // Camera path: a transient file input with the capture hint, the
    // closest a web page gets to opening the device camera.
    let on_camera_capture = move |_| {
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document
            .create_element("input")
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_type("file");
        input.set_accept("image/*");
        let _ = input.set_attribute("capture", "environment");

        let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let input: HtmlInputElement = match ev.target() {
                Some(target) => target.unchecked_into(),
                None => return,
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                attach(file);
            }
        }) as Box<dyn FnMut(_)>);

        input.set_onchange(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        input.click();
    };

    let on_continue = move |_| {
        wizard.update(|w| {
            if let Err(e) = w.advance() {
                console::warn!("continue rejected:", e.to_string());
            }
        });
    };

    let on_back = move |_| wizard.update(|w| w.back());

    let on_submit = move |_| {
        let request = wizard
            .try_update(|w| w.begin_upload().ok().map(|_| w.submission_request()))
            .flatten();
        let Some(request) = request else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let receipt = SimulatedBackend::new().submit(&request).await;
            wizard.update(|w| {
                if let Err(e) = w.complete_upload(receipt) {
                    console::error!("completion rejected:", e.to_string());
                }
            });
        });
    };

    let on_reset = move |_| {
        wizard.update(|w| w.reset());
        set_notice.set(None);
    };

    let at_step = move |step: WizardStep| wizard.with(|w| w.step == step);

    view! {
        <div class="upload-form">
            <StepIndicator wizard=wizard />

            <Show when=move || at_step(WizardStep::Capture)>
                <div class="card wizard-card">
                    <div class="card-header">
                        <h3>"Upload Form 34A Image"</h3>
                    </div>
                    <div class="card-body">
                        <div class="dropzone">
                            {move || {
                                let attached = wizard.with(|w| {
                                    w.image.as_ref().map(|i| i.file_name.clone())
                                });
                                match attached {
                                    Some(name) => view! {
                                        <div class="dropzone-state">
                                            <span class="big-icon ok">"✔"</span>
                                            <p class="file-name">{name}</p>
                                            <p class="hint">"Image uploaded successfully"</p>
                                        </div>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <div class="dropzone-state">
                                            <span class="big-icon">"⬆"</span>
                                            <p class="file-name">"Upload Form 34A"</p>
                                            <p class="hint">"Take a photo or upload a scan"</p>
                                        </div>
                                    }
                                    .into_any(),
                                }
                            }}
                        </div>

                        <div class="picker-buttons">
                            <button class="btn btn-secondary" on:click=on_camera_capture>
                                "Take Photo"
                            </button>
                            <button class="btn btn-secondary" on:click=on_pick_file>
                                "Upload File"
                            </button>
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden-input"
                                node_ref=file_input
                                on:change=on_file_change
                            />
                        </div>

                        {move || {
                            wizard.with(|w| w.gps).map(|fix| {
                                view! {
                                    <div class="gps-line">
                                        <span>{format!("GPS: {}", fix)}</span>
                                        <span class="badge badge-verified">"Verified"</span>
                                    </div>
                                }
                            })
                        }}

                        {move || {
                            notice.get().map(|n| {
                                view! {
                                    <div class=format!("notice {}", n.variant)>
                                        <div>
                                            <p class="notice-title">{n.title}</p>
                                            <p>{n.body}</p>
                                        </div>
                                        <button
                                            class="notice-dismiss"
                                            on:click=move |_| set_notice.set(None)
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                        }}

                        <button
                            class="btn btn-primary btn-block"
                            disabled=move || !wizard.with(|w| w.can_continue())
                            on:click=on_continue
                        >
                            "Continue to Details"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || at_step(WizardStep::Details)>
                <div class="card wizard-card">
                    <div class="card-header">
                        <h3>"Polling Station Details"</h3>
                    </div>
                    <div class="card-body">
                        <div class="form-grid">
                            <div class="form-group">
                                <label for="polling-station">"Polling Station Code"</label>
                                <input
                                    type="text"
                                    id="polling-station"
                                    placeholder="e.g., 001A"
                                    prop:value=move || {
                                        wizard.with(|w| w.details.polling_station.clone())
                                    }
                                    on:input=move |ev| {
                                        wizard.update(|w| {
                                            w.details.polling_station = event_target_value(&ev);
                                        });
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label for="county">"County"</label>
                                <select
                                    id="county"
                                    prop:value=move || wizard.with(|w| w.details.county.clone())
                                    on:change=move |ev| {
                                        wizard.update(|w| {
                                            w.details.county = event_target_value(&ev);
                                        });
                                    }
                                >
                                    <option value="" disabled selected>
                                        "Select county"
                                    </option>
                                    {sample::county_names()
                                        .into_iter()
                                        .map(|name| view! { <option value=name>{name}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="constituency">"Constituency"</label>
                                <input
                                    type="text"
                                    id="constituency"
                                    placeholder="Enter constituency"
                                    prop:value=move || {
                                        wizard.with(|w| w.details.constituency.clone())
                                    }
                                    on:input=move |ev| {
                                        wizard.update(|w| {
                                            w.details.constituency = event_target_value(&ev);
                                        });
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label for="ward">"Ward"</label>
                                <input
                                    type="text"
                                    id="ward"
                                    placeholder="Enter ward"
                                    prop:value=move || wizard.with(|w| w.details.ward.clone())
                                    on:input=move |ev| {
                                        wizard.update(|w| {
                                            w.details.ward = event_target_value(&ev);
                                        });
                                    }
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="notes">"Additional Notes (Optional)"</label>
                            <textarea
                                id="notes"
                                placeholder="Any additional information about this form..."
                                prop:value=move || wizard.with(|w| w.details.notes.clone())
                                on:input=move |ev| {
                                    wizard.update(|w| {
                                        w.details.notes = event_target_value(&ev);
                                    });
                                }
                            ></textarea>
                        </div>

                        <div class="notice notice-info">
                            <div>
                                <p class="notice-title">"Blockchain Verification"</p>
                                <p>
                                    "Your submission will be anonymized and anchored on the \
                                     blockchain for transparency."
                                </p>
                            </div>
                        </div>

                        <div class="wizard-actions">
                            <button
                                class="btn btn-secondary"
                                disabled=move || wizard.with(|w| w.uploading)
                                on:click=on_back
                            >
                                "Back"
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=move || !wizard.with(|w| w.can_submit())
                                on:click=on_submit
                            >
                                {move || {
                                    if wizard.with(|w| w.uploading) {
                                        "Uploading..."
                                    } else {
                                        "Submit Form"
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || at_step(WizardStep::Confirmation)>
                <div class="card wizard-card success-card">
                    <span class="big-icon ok">"✔"</span>
                    <h3>"Successfully Submitted!"</h3>
                    <p class="hint">
                        "Your Form 34A has been uploaded, verified, and anchored on the \
                         blockchain."
                    </p>

                    <div class="receipt-rows">
                        <div class="receipt-row">
                            <span>"Blockchain Hash:"</span>
                            <code>
                                {move || {
                                    wizard.with(|w| {
                                        w.receipt
                                            .as_ref()
                                            .map(|r| r.anchor_hash.clone())
                                            .unwrap_or_default()
                                    })
                                }}
                            </code>
                        </div>
                        <div class="receipt-row">
                            <span>"Verification Status:"</span>
                            <span class="badge badge-verified">
                                {move || {
                                    wizard.with(|w| {
                                        w.receipt
                                            .as_ref()
                                            .map(|r| r.status.label())
                                            .unwrap_or("Unknown")
                                    })
                                }}
                            </span>
                        </div>
                        <div class="receipt-row">
                            <span>"Polling Station:"</span>
                            <span>
                                {move || wizard.with(|w| w.details.polling_station.clone())}
                            </span>
                        </div>
                    </div>

                    <button class="btn btn-primary" on:click=on_reset>
                        "Upload Another Form"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Three-dot progress indicator with connectors between steps
#[component]
fn StepIndicator(wizard: RwSignal<UploadWizard>) -> impl IntoView {
    view! {
        <div class="step-indicator">
            {[1u8, 2, 3]
                .into_iter()
                .map(|number| {
                    let dot_class = move || {
                        let current = wizard.with(|w| w.step.number());
                        if current >= number {
                            "step-dot reached"
                        } else {
                            "step-dot"
                        }
                    };
                    let dot_label = move || {
                        let current = wizard.with(|w| w.step.number());
                        if current > number {
                            "✔".to_string()
                        } else {
                            number.to_string()
                        }
                    };
                    let connector = (number < 3).then(|| {
                        let connector_class = move || {
                            if wizard.with(|w| w.step.number()) > number {
                                "step-connector reached"
                            } else {
                                "step-connector"
                            }
                        };
                        view! { <div class=connector_class></div> }
                    });
                    view! {
                        <div class="step-segment">
                            <div class=dot_class>{dot_label}</div>
                            {connector}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
