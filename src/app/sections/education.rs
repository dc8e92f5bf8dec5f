use leptos::prelude::*;

use super::ClosingBrace;
use crate::portfolio::{Icon, CERTIFICATES, EDUCATION};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 lg:gap-12">
                    <div class="w-full">
                        <ClassHeading name="Education" />
                        <div class="space-y-6">
                            {EDUCATION
                                .iter()
                                .map(|edu| {
                                    view! {
                                        <div class="bg-card border border-border rounded-lg p-6 hover:border-primary/50 transition-colors w-full space-y-3">
                                            <div class="flex items-start space-x-3">
                                                <i class=format!("{} text-primary mt-1 flex-shrink-0", Icon::GraduationCap.class()) />
                                                <div class="flex-1 min-w-0">
                                                    <h3 class="text-lg break-words">{edu.degree}</h3>
                                                    <p class="text-muted-foreground break-words">
                                                        {edu.institution} " • " {edu.year}
                                                    </p>
                                                </div>
                                            </div>
                                            <p class="text-muted-foreground text-sm leading-relaxed ml-8 break-words">
                                                {edu.description}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <ClosingBrace />
                    </div>

                    <div class="w-full">
                        <ClassHeading name="Certifications" />
                        <div class="space-y-6">
                            {CERTIFICATES
                                .iter()
                                .map(|cert| {
                                    view! {
                                        <div class="bg-card border border-border rounded-lg p-6 hover:border-primary/50 transition-colors w-full">
                                            <div class="flex items-start justify-between gap-4">
                                                <div class="flex items-start space-x-3 flex-1 min-w-0">
                                                    <i class=format!("{} text-primary mt-1 flex-shrink-0", Icon::Award.class()) />
                                                    <div class="flex-1 min-w-0">
                                                        <h3 class="text-lg break-words">{cert.title}</h3>
                                                        <p class="text-muted-foreground break-words">{cert.issuer}</p>
                                                        <p class="text-sm text-muted-foreground">{cert.year}</p>
                                                    </div>
                                                </div>
                                                <a
                                                    href=cert.link
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=format!("View {} certificate", cert.title)
                                                    class="px-2 py-1 rounded-md border border-border hover:bg-accent flex-shrink-0"
                                                >
                                                    <i class=Icon::ExternalLink.class() />
                                                </a>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <ClosingBrace />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ClassHeading(name: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-xl md:text-2xl mb-8">
            <span class="text-primary">"class"</span>
            " "
            {name}
            " "
            <span class="text-primary">"{"</span>
        </h2>
    }
}
