use leptos::prelude::*;

use super::{ClosingBrace, CodeHeading, TechTags};
use crate::portfolio::{Icon, EXPERIENCE};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <CodeHeading keyword="function" title="workExperience()" open_brace=true />
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="bg-card border border-border rounded-lg p-6 hover:border-primary/50 transition-colors space-y-4">
                                    <div class="flex items-start space-x-3">
                                        <i class=format!("{} text-primary mt-1", Icon::Briefcase.class()) />
                                        <div class="flex-1 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2">
                                            <div>
                                                <h3 class="text-xl">{exp.position}</h3>
                                                <p class="text-muted-foreground">
                                                    {exp.company} " • " {exp.location}
                                                </p>
                                            </div>
                                            <span class="text-sm text-muted-foreground px-3 py-1 bg-muted rounded border border-border">
                                                {exp.duration}
                                            </span>
                                        </div>
                                    </div>
                                    <p class="text-muted-foreground leading-relaxed ml-8">
                                        {exp.description}
                                    </p>
                                    <div class="ml-8 space-y-3">
                                        <div>
                                            <h4 class="text-sm text-primary mb-2">"Key Projects:"</h4>
                                            <ul class="text-sm text-muted-foreground space-y-1">
                                                {exp
                                                    .highlights
                                                    .iter()
                                                    .map(|h| {
                                                        view! {
                                                            <li class="flex items-start">
                                                                <span class="text-primary mr-2">"•"</span>
                                                                {*h}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                        <div>
                                            <h4 class="text-sm text-primary mb-2">"Tech Stack:"</h4>
                                            <TechTags tech=exp.tech />
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <ClosingBrace />
            </div>
        </section>
    }
}
