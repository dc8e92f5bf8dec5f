use leptos::prelude::*;

use super::CodeHeading;
use crate::portfolio::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <CodeHeading keyword="//" title="Technical Skills" />
                <div class="flex flex-wrap justify-center gap-3">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="flex items-center space-x-2 px-4 py-2 bg-card border border-border rounded-md hover:border-primary/50 transition-colors">
                                    <i class=format!("{} text-primary", skill.icon.class()) />
                                    <span class="text-sm">{skill.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
