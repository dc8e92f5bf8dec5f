use leptos::prelude::*;

use crate::portfolio::{LOCATION, OWNER};
use crate::site::build_date_label;

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_date_label(env!("BUILD_TIME"));

    view! {
        <footer class="border-t border-border py-12 px-4">
            <div class="max-w-4xl mx-auto">
                <div class="text-center md:text-left">
                    <p class="text-muted-foreground">
                        <span class="text-primary">"$"</span>
                        " Available for new opportunities"
                    </p>
                    <p class="text-sm text-muted-foreground mt-1">
                        "Based in " {LOCATION} " • Open to remote work"
                    </p>
                </div>
                <div class="text-center mt-8 pt-8 border-t border-border space-y-1">
                    <p class="text-sm text-muted-foreground">
                        <span class="text-primary">"#!/bin/bash"</span>
                        " • Built with Rust, Leptos & Tailwind CSS"
                    </p>
                    <p class="text-xs text-muted-foreground">
                        "© " {env!("BUILD_YEAR")} " " {OWNER}
                        {built.map(|date| format!(" • last built {date}"))}
                    </p>
                </div>
            </div>
        </footer>
    }
}
