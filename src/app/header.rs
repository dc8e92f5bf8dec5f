use leptos::{either::Either, prelude::*};

use super::browser::scroll_to;
use super::nav::use_page_nav;
use crate::portfolio::BRAND;
use crate::site::{Page, Theme};

#[component]
pub fn Navbar(theme: Signal<Theme>, toggle_theme: Callback<()>) -> impl IntoView {
    let nav = use_page_nav();

    // From the lab the target section isn't mounted yet; wait a frame for it.
    let go_to_section = move |id: &'static str| match nav.page_untracked() {
        Page::Home => scroll_to(id),
        Page::Lab => {
            nav.navigate_to(Page::Home);
            request_animation_frame(move || scroll_to(id));
        }
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-sm border-b border-border">
            <div class="max-w-4xl mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <button
                        class="flex items-center space-x-1"
                        on:click=move |_| nav.navigate_to(Page::Home)
                    >
                        <span class="text-primary">"$"</span>
                        <span class="text-lg">{BRAND}</span>
                    </button>

                    <div class="flex items-center space-x-4 sm:space-x-6">
                        <button
                            class="flex items-center space-x-2 text-muted-foreground hover:text-primary transition-colors"
                            on:click=move |_| go_to_section("home")
                        >
                            <i class="extra-home" />
                            <span>"Home"</span>
                        </button>
                        {move || match nav.page() {
                            Page::Home => Either::Left(view! {
                                <button
                                    class="text-muted-foreground hover:text-primary transition-colors"
                                    on:click=move |_| nav.navigate_to(Page::Lab)
                                >
                                    "Lab"
                                </button>
                            }),
                            Page::Lab => Either::Right(view! {
                                <button
                                    class="text-muted-foreground hover:text-primary transition-colors"
                                    on:click=move |_| nav.navigate_to(Page::Home)
                                >
                                    "Portfolio"
                                </button>
                            }),
                        }}
                        <button
                            class="px-3 py-1 rounded-md border border-border hover:bg-accent hover:border-primary/50 transition-colors"
                            on:click=move |_| go_to_section("contact")
                        >
                            "📧 Contact"
                        </button>
                        <button
                            class="px-2 py-1 rounded-md hover:bg-accent hover:text-primary transition-colors"
                            aria-label="Toggle theme"
                            on:click=move |_| toggle_theme.run(())
                        >
                            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
