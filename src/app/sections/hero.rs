use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::app::nav::use_page_nav;
use crate::portfolio::{BLURB, EMAIL, GITHUB_URL, LINKEDIN_URL, OWNER, ROLE, TAGLINES};
use crate::site::{next_tagline, Page, TAGLINE_INTERVAL_MS};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_page_nav();
    let mailto = format!("mailto:{EMAIL}");

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-4xl mx-auto text-center space-y-8">
                <div class="space-y-4">
                    <h1 class="text-4xl md:text-6xl tracking-tight">
                        <span class="text-primary">"$"</span>
                        " "
                        {OWNER}
                        <span class="cursor"></span>
                    </h1>
                    <h2 class="text-xl md:text-2xl text-muted-foreground">{ROLE}</h2>
                    <div class="space-y-4 max-w-2xl mx-auto">
                        <p class="text-base md:text-lg text-muted-foreground">{BLURB}</p>
                        <div class="bg-card border border-border rounded-md p-4">
                            <RotatingTagline />
                        </div>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="flex gap-4 justify-center items-center text-2xl">
                        <a
                            href=mailto
                            class="hover:text-primary transition-colors"
                            aria-label="Email"
                        >
                            <i class="extra-email" />
                        </a>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-primary transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain" />
                        </a>
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hover:text-primary transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain" />
                        </a>
                    </div>
                    <div class="flex justify-center">
                        <button
                            class="bg-primary/20 hover:bg-primary/30 text-primary px-8 py-3 rounded-md font-medium border border-primary/30 transition-all duration-200"
                            on:click=move |_| nav.navigate_to(Page::Lab)
                        >
                            <i class="extra-terminal mr-2" />
                            "LAB"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Cycles through [`TAGLINES`] while mounted.
#[component]
pub fn RotatingTagline() -> impl IntoView {
    let (index, set_index) = signal(0usize);
    use_interval_fn(
        move || set_index.update(|i| *i = next_tagline(*i, TAGLINES.len())),
        TAGLINE_INTERVAL_MS,
    );

    view! {
        <p class="text-sm md:text-base text-muted-foreground/80 transition-opacity duration-500 min-h-[3rem] flex items-center justify-center">
            {move || TAGLINES.get(index.get()).copied().unwrap_or_default()}
        </p>
    }
}
