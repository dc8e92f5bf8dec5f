use leptos::prelude::*;

use super::{CodeHeading, TechTags};
use crate::portfolio::{ProjectEntry, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <CodeHeading keyword="/*" title="Projects */" />
                <div class="space-y-8">
                    {PROJECTS.iter().map(|p| view! { <ProjectCard project=*p /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let link_class = "px-3 py-1 text-sm rounded-md border border-border hover:bg-accent transition-colors";
    view! {
        <div class="bg-card border border-border rounded-lg p-6 hover:border-primary/50 transition-colors space-y-4">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <h3 class="text-xl">{project.title}</h3>
                <div class="flex gap-2">
                    {project
                        .code_link()
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class=link_class>
                                    <i class="devicon-github-plain mr-2" />
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class=link_class>
                                    <i class="extra-link mr-2" />
                                    "Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
            <ul class="list-disc list-inside text-muted-foreground leading-relaxed space-y-1">
                {project.highlights().into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
            </ul>
            <h4 class="text-lg mt-4">"Tech Stack:"</h4>
            <TechTags tech=project.tech />
        </div>
    }
}
