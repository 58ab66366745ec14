//! Course catalogue and course details.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::guards::RoleGuard;
use crate::components::layout::PortalLayout;
use crate::components::list_status::ListStatus;
use crate::net::types::{Course, NewCourse};
use crate::state::auth::use_auth;
use crate::state::resources::{DetailState, ListState, create_item, delete_item, load_detail, load_list};
use crate::util::format::{EMPTY_CELL, format_amount, or_dash};
use crate::util::guard::COURSES_ROLES;
use crate::util::role::Action;

pub(crate) fn validate_new_course(title: &str, description: &str) -> Result<NewCourse, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Course title is required.");
    }
    Ok(NewCourse { title: title.to_owned(), description: description.trim().to_owned() })
}

pub(crate) fn course_href(course: &Course) -> String {
    format!("/courses/{}", course.id)
}

pub(crate) fn price_label(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => format_amount(p),
        Some(_) => "Free".to_owned(),
        None => EMPTY_CELL.to_owned(),
    }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <RoleGuard allowed=COURSES_ROLES>
            <PortalLayout title="Courses">
                <CoursesTable/>
            </PortalLayout>
        </RoleGuard>
    }
}

#[component]
fn CoursesTable() -> impl IntoView {
    let auth = use_auth();
    let courses = RwSignal::new(ListState::<Course>::default());
    load_list(courses);

    let can_create = move || auth.get().effective_role().is_some_and(|r| r.can(Action::CreateCourses));
    let can_delete = move || auth.get().effective_role().is_some_and(|r| r.can(Action::DeleteCourses));

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if courses.get_untracked().pending {
            return;
        }
        match validate_new_course(&title.get_untracked(), &description.get_untracked()) {
            Ok(payload) => {
                form_error.set(None);
                create_item(courses, payload, move || {
                    title.set(String::new());
                    description.set(String::new());
                });
            }
            Err(text) => form_error.set(Some(text)),
        }
    };

    view! {
        <Show when=can_create>
            <form class="inline-form" on:submit=on_create>
                <input
                    class="inline-form__input"
                    placeholder="Course title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="inline-form__input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || courses.get().pending>
                    "Add course"
                </button>
                {move || form_error.get().map(|text| view! { <span class="inline-form__error">{text}</span> })}
            </form>
        </Show>
        <ListStatus list=courses/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Instructor"</th>
                    <th>"Price"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let deletable = can_delete();
                    courses
                        .get()
                        .items
                        .into_iter()
                        .map(|course| {
                            let id = course.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        <a href=course_href(&course)>{course.title.clone()}</a>
                                    </td>
                                    <td>{or_dash(course.instructor.as_deref())}</td>
                                    <td>{price_label(course.price)}</td>
                                    <td class="data-table__actions">
                                        {deletable
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| delete_item(courses, id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

/// `/courses/:id`.
#[component]
pub fn CourseDetailsPage() -> impl IntoView {
    view! {
        <RoleGuard allowed=COURSES_ROLES>
            <PortalLayout title="Course details">
                <CourseDetails/>
            </PortalLayout>
        </RoleGuard>
    }
}

#[component]
fn CourseDetails() -> impl IntoView {
    let params = use_params_map();
    let detail = RwSignal::new(DetailState::<Course>::default());

    // Refetch when navigating between courses without leaving the route.
    Effect::new(move || {
        if let Some(id) = params.with(|p| p.get("id")) {
            load_detail(detail, id);
        }
    });

    view! {
        {move || {
            let state = detail.get();
            if let Some(error) = state.error {
                view! { <p class="list-status list-status--error" role="alert">{error}</p> }.into_any()
            } else if let Some(course) = state.item {
                view! {
                    <article class="detail-card">
                        <h2>{course.title.clone()}</h2>
                        <p>{or_dash(course.description.as_deref())}</p>
                        <dl class="detail-card__facts">
                            <dt>"Instructor"</dt>
                            <dd>{or_dash(course.instructor.as_deref())}</dd>
                            <dt>"Price"</dt>
                            <dd>{price_label(course.price)}</dd>
                        </dl>
                    </article>
                }
                    .into_any()
            } else {
                view! { <p class="list-status">"Loading..."</p> }.into_any()
            }
        }}
        <a class="btn" href="/courses">"Back to courses"</a>
    }
}
