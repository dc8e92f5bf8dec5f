mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::{Hero, RotatingTagline};
pub use projects::Projects;
pub use skills::Skills;

use leptos::prelude::*;

/// Section title dressed up as a line of code, e.g. `class Education {`.
#[component]
fn CodeHeading(
    keyword: &'static str,
    title: &'static str,
    #[prop(optional)] open_brace: bool,
) -> impl IntoView {
    view! {
        <h2 class="text-2xl md:text-3xl mb-12 text-center">
            <span class="text-primary">{keyword}</span>
            " "
            {title}
            {open_brace.then(|| view! { " " <span class="text-primary">"{"</span> })}
        </h2>
    }
}

#[component]
fn ClosingBrace() -> impl IntoView {
    view! {
        <div class="mt-8 text-center">
            <span class="text-primary">"}"</span>
        </div>
    }
}

#[component]
fn TechTags(tech: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tech
                .iter()
                .map(|t| {
                    view! {
                        <span class="px-2 py-1 bg-muted text-muted-foreground text-xs rounded border border-border">
                            {*t}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
