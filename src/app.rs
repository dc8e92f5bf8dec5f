mod browser;
mod header;
mod homepage;
mod lab;
mod nav;
mod sections;
mod storage;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::portfolio::{BLURB, OWNER};
use crate::site::{Page, Theme, THEME_KEY};
use header::Navbar;
use homepage::HomePage;
use lab::LabPage;
use nav::PageNav;
use storage::persisted;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=BLURB />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Site />
            </Routes>
        </Router>
    }
}

/// Owns the theme and the current page; everything below only renders.
#[component]
fn Site() -> impl IntoView {
    let nav = PageNav::new();
    provide_context(nav);

    let (theme, set_theme) = persisted::<Theme>(THEME_KEY);
    let toggle_theme = Callback::new(move |_: ()| set_theme.update(|t| *t = t.toggled()));

    view! {
        <div class=move || {
            format!("{} min-h-screen bg-background text-foreground", theme.get().css_class())
        }>
            <Navbar theme=theme toggle_theme />
            <div class="fixed inset-0 code-bg opacity-30 pointer-events-none" />
            <div class="relative z-10 pt-20">
                {move || match nav.page() {
                    Page::Home => Either::Left(view! { <HomePage /> }),
                    Page::Lab => Either::Right(view! { <LabPage /> }),
                }}
            </div>
        </div>
    }
}
