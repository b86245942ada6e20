//! Tab sections of the candidate profile editor.
//!
//! Every input writes straight into the shared `ProfileDraft` signal. Row
//! lists re-render only when their length changes, so typing in a row keeps
//! focus.

use leptos::prelude::*;

use crate::state::post_job::CURRENCIES;
use crate::state::profile::{AVAILABILITY, PROFICIENCY, ProfileDraft, parse_optional};

/// Read side and write side of one text input.
#[derive(Clone, Copy)]
struct Binding {
    value: Signal<String>,
    set: Callback<String>,
}

/// `Binding` for a `String` place inside the draft.
macro_rules! bind {
    ($draft:ident, |$d:ident| $place:expr) => {
        Binding {
            value: Signal::derive(move || $draft.with(|$d| $place.clone())),
            set: Callback::new(move |value: String| $draft.update(|$d| $place = value)),
        }
    };
}

/// `Binding` for a `String` field of row `$index`; a vanished row reads empty.
macro_rules! bind_row {
    ($draft:ident, |$d:ident| $rows:expr, $index:expr, |$r:ident| $place:expr) => {
        Binding {
            value: Signal::derive(move || {
                $draft.with(|$d| $rows.get($index).map(|$r| $place.clone()).unwrap_or_default())
            }),
            set: Callback::new(move |value: String| {
                $draft.update(|$d| {
                    if let Some($r) = $rows.get_mut($index) {
                        $place = value;
                    }
                });
            }),
        }
    };
}

#[component]
fn TextField(
    label: &'static str,
    binding: Binding,
    #[prop(optional)] kind: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                type=kind.unwrap_or("text")
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn TextArea(
    label: &'static str,
    binding: Binding,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                rows=rows
                placeholder=placeholder
                prop:value=move || binding.value.get()
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
fn SelectField(label: &'static str, binding: Binding, options: &'static [&'static str]) -> impl IntoView {
    let choices = options
        .iter()
        .map(|option| {
            view! {
                <option value=*option selected=move || binding.value.with(|v| v.as_str() == *option)>
                    {*option}
                </option>
            }
        })
        .collect_view();
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select on:change=move |ev| binding.set.run(event_target_value(&ev))>{choices}</select>
        </label>
    }
}

#[component]
fn CheckField(label: &'static str, value: Signal<bool>, set: Callback<bool>) -> impl IntoView {
    view! {
        <label class="field field--check">
            <input type="checkbox" prop:checked=move || value.get() on:change=move |ev| set.run(event_target_checked(&ev))/>
            <span>{label}</span>
        </label>
    }
}

fn row_count(draft: RwSignal<ProfileDraft>, len: fn(&ProfileDraft) -> usize) -> Memo<usize> {
    Memo::new(move |_| draft.with(len))
}

#[component]
pub fn PersonalSection(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    view! {
        <section class="profile-section">
            <h2>"Personal Information"</h2>
            <div class="form__grid">
                <TextField label="Full Name *" binding=bind!(draft, |d| d.profile.name) required=true/>
                <TextField label="Email" binding=bind!(draft, |d| d.profile.email) kind="email" disabled=true/>
                <TextField
                    label="Phone"
                    binding=bind!(draft, |d| d.profile.phone)
                    kind="tel"
                    placeholder="+1 234 567 8900"
                />
                <TextField label="Date of Birth" binding=bind!(draft, |d| d.profile.date_of_birth) kind="date"/>
                <TextField label="City" binding=bind!(draft, |d| d.profile.location.city)/>
                <TextField label="State/Province" binding=bind!(draft, |d| d.profile.location.state)/>
                <TextField label="Country" binding=bind!(draft, |d| d.profile.location.country)/>
                <TextField label="Zip/Postal Code" binding=bind!(draft, |d| d.profile.location.zip_code)/>
            </div>
            <TextArea
                label="Bio/About Me"
                binding=bind!(draft, |d| d.profile.bio)
                placeholder="Tell us about yourself..."
                rows=4
            />
        </section>
    }
}

#[component]
pub fn ProfessionalSection(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let experience = Binding {
        value: Signal::derive(move || draft.with(|d| d.profile.experience.to_string())),
        set: Callback::new(move |raw: String| {
            draft.update(|d| d.profile.experience = raw.trim().parse().unwrap_or(0));
        }),
    };
    let salary_min = Binding {
        value: Signal::derive(move || {
            draft.with(|d| d.profile.salary_expectation.min.map(|v| v.to_string()).unwrap_or_default())
        }),
        set: Callback::new(move |raw: String| draft.update(|d| d.profile.salary_expectation.min = parse_optional(&raw))),
    };
    let salary_max = Binding {
        value: Signal::derive(move || {
            draft.with(|d| d.profile.salary_expectation.max.map(|v| v.to_string()).unwrap_or_default())
        }),
        set: Callback::new(move |raw: String| draft.update(|d| d.profile.salary_expectation.max = parse_optional(&raw))),
    };

    view! {
        <section class="profile-section">
            <h2>"Professional Information"</h2>
            <div class="form__grid">
                <TextField
                    label="Current Job Title"
                    binding=bind!(draft, |d| d.profile.job_title)
                    placeholder="e.g., Software Engineer"
                />
                <TextField
                    label="Current Company"
                    binding=bind!(draft, |d| d.profile.current_company)
                    placeholder="e.g., Tech Corp"
                />
                <TextField label="Years of Experience" binding=experience kind="number"/>
                <SelectField label="Availability" binding=bind!(draft, |d| d.profile.availability) options=&AVAILABILITY/>
            </div>
            <TextField
                label="Skills (comma-separated)"
                binding=bind!(draft, |d| d.skills_input)
                placeholder="JavaScript, React, Node.js, Python"
            />
            <h3>"Salary Expectation"</h3>
            <div class="form__grid">
                <TextField label="Min" binding=salary_min kind="number" placeholder="50000"/>
                <TextField label="Max" binding=salary_max kind="number" placeholder="100000"/>
                <SelectField
                    label="Currency"
                    binding=bind!(draft, |d| d.profile.salary_expectation.currency)
                    options=&CURRENCIES
                />
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let count = row_count(draft, |d| d.profile.education.len());
    let rows = move || {
        (0..count.get())
            .map(|i| {
                let studying = Signal::derive(move || {
                    draft.with(|d| d.profile.education.get(i).is_some_and(|r| r.currently_studying))
                });
                let set_studying = Callback::new(move |on: bool| {
                    draft.update(|d| {
                        if let Some(row) = d.profile.education.get_mut(i) {
                            row.currently_studying = on;
                        }
                    });
                });
                view! {
                    <div class="profile-row">
                        <div class="profile-row__header">
                            <h3>{format!("Education #{}", i + 1)}</h3>
                            <button type="button" class="btn btn--danger" on:click=move |_| draft.update(|d| d.remove_education(i))>
                                "Remove"
                            </button>
                        </div>
                        <div class="form__grid">
                            <TextField label="Degree *" binding=bind_row!(draft, |d| d.profile.education, i, |r| r.degree) required=true/>
                            <TextField label="Field of Study *" binding=bind_row!(draft, |d| d.profile.education, i, |r| r.field) required=true/>
                            <TextField label="Institution *" binding=bind_row!(draft, |d| d.profile.education, i, |r| r.institution) required=true/>
                            <TextField label="Start Date" binding=bind_row!(draft, |d| d.profile.education, i, |r| r.start_date) kind="date"/>
                            <TextField
                                label="End Date"
                                binding=bind_row!(draft, |d| d.profile.education, i, |r| r.end_date)
                                kind="date"
                                disabled=studying
                            />
                            <CheckField label="Currently Studying" value=studying set=set_studying/>
                        </div>
                        <TextArea label="Description" binding=bind_row!(draft, |d| d.profile.education, i, |r| r.description)/>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="profile-section">
            <div class="profile-section__header">
                <h2>"Education"</h2>
                <button type="button" class="btn" on:click=move |_| draft.update(ProfileDraft::add_education)>
                    "Add Education"
                </button>
            </div>
            {rows}
        </section>
    }
}

#[component]
pub fn WorkSection(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let count = row_count(draft, |d| d.profile.work_history.len());
    let rows = move || {
        (0..count.get())
            .map(|i| {
                let working = Signal::derive(move || {
                    draft.with(|d| d.profile.work_history.get(i).is_some_and(|r| r.currently_working))
                });
                let set_working = Callback::new(move |on: bool| {
                    draft.update(|d| {
                        if let Some(row) = d.profile.work_history.get_mut(i) {
                            row.currently_working = on;
                        }
                    });
                });
                view! {
                    <div class="profile-row">
                        <div class="profile-row__header">
                            <h3>{format!("Experience #{}", i + 1)}</h3>
                            <button type="button" class="btn btn--danger" on:click=move |_| draft.update(|d| d.remove_work(i))>
                                "Remove"
                            </button>
                        </div>
                        <div class="form__grid">
                            <TextField label="Job Title *" binding=bind_row!(draft, |d| d.profile.work_history, i, |r| r.title) required=true/>
                            <TextField label="Company *" binding=bind_row!(draft, |d| d.profile.work_history, i, |r| r.company) required=true/>
                            <TextField label="Location" binding=bind_row!(draft, |d| d.profile.work_history, i, |r| r.location)/>
                            <TextField
                                label="Start Date *"
                                binding=bind_row!(draft, |d| d.profile.work_history, i, |r| r.start_date)
                                kind="date"
                                required=true
                            />
                            <TextField
                                label="End Date"
                                binding=bind_row!(draft, |d| d.profile.work_history, i, |r| r.end_date)
                                kind="date"
                                disabled=working
                            />
                            <CheckField label="Currently Working" value=working set=set_working/>
                        </div>
                        <TextArea
                            label="Description"
                            binding=bind_row!(draft, |d| d.profile.work_history, i, |r| r.description)
                            placeholder="Describe your responsibilities and achievements..."
                        />
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="profile-section">
            <div class="profile-section__header">
                <h2>"Work History"</h2>
                <button type="button" class="btn" on:click=move |_| draft.update(ProfileDraft::add_work)>
                    "Add Experience"
                </button>
            </div>
            {rows}
        </section>
    }
}

#[component]
pub fn AdditionalSection(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let certifications = row_count(draft, |d| d.profile.certifications.len());
    let languages = row_count(draft, |d| d.profile.languages.len());

    let certification_rows = move || {
        (0..certifications.get())
            .map(|i| {
                view! {
                    <div class="profile-row profile-row--inline">
                        <TextField
                            label="Certification Name"
                            binding=bind_row!(draft, |d| d.profile.certifications, i, |r| r.name)
                        />
                        <TextField label="Issuer" binding=bind_row!(draft, |d| d.profile.certifications, i, |r| r.issuer)/>
                        <button
                            type="button"
                            class="btn btn--danger"
                            title="Remove certification"
                            on:click=move |_| draft.update(|d| d.remove_certification(i))
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    let language_rows = move || {
        (0..languages.get())
            .map(|i| {
                view! {
                    <div class="profile-row profile-row--inline">
                        <TextField label="Language" binding=bind_row!(draft, |d| d.profile.languages, i, |r| r.language)/>
                        <SelectField
                            label="Proficiency"
                            binding=bind_row!(draft, |d| d.profile.languages, i, |r| r.proficiency)
                            options=&PROFICIENCY
                        />
                        <button
                            type="button"
                            class="btn btn--danger"
                            title="Remove language"
                            on:click=move |_| draft.update(|d| d.remove_language(i))
                        >
                            "×"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="profile-section">
            <h2>"Additional Information"</h2>

            <div class="profile-section__header">
                <h3>"Certifications"</h3>
                <button type="button" class="btn" on:click=move |_| draft.update(ProfileDraft::add_certification)>
                    "Add Certification"
                </button>
            </div>
            {certification_rows}

            <div class="profile-section__header">
                <h3>"Languages"</h3>
                <button type="button" class="btn" on:click=move |_| draft.update(ProfileDraft::add_language)>
                    "Add Language"
                </button>
            </div>
            {language_rows}

            <h3>"Social Links"</h3>
            <div class="form__grid">
                <TextField
                    label="LinkedIn URL"
                    binding=bind!(draft, |d| d.profile.linked_in)
                    kind="url"
                    placeholder="https://linkedin.com/in/yourprofile"
                />
                <TextField
                    label="GitHub URL"
                    binding=bind!(draft, |d| d.profile.github)
                    kind="url"
                    placeholder="https://github.com/yourusername"
                />
                <TextField
                    label="Portfolio URL"
                    binding=bind!(draft, |d| d.profile.portfolio)
                    kind="url"
                    placeholder="https://yourportfolio.com"
                />
                <TextField
                    label="Website"
                    binding=bind!(draft, |d| d.profile.website)
                    kind="url"
                    placeholder="https://yourwebsite.com"
                />
            </div>
        </section>
    }
}
