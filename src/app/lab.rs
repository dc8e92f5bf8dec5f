mod notepad;
mod text_tool;

use leptos::{either::Either, ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use super::nav::use_page_nav;
use super::sections::RotatingTagline;
use crate::portfolio::{LabTool, LabToolCard, ToolStatus, FUTURE_TOOLS, LAB_TOOLS};
use crate::site::{LabShortcut, Page};
use notepad::Notepad;
use text_tool::TextTool;

fn modal_title(tool: LabTool) -> &'static str {
    match tool {
        LabTool::TextUtility => "Text Utility Tool",
        LabTool::Notepad => "Code Notepad",
    }
}

#[component]
pub fn LabPage() -> impl IntoView {
    let nav = use_page_nav();
    let (active, set_active) = signal(None::<LabTool>);

    // Ctrl/Cmd+H goes home, Escape closes whatever tool is open
    let _ = use_event_listener(use_window(), ev::keydown, move |e: ev::KeyboardEvent| {
        match LabShortcut::from_key(&e.key(), e.ctrl_key() || e.meta_key()) {
            Some(LabShortcut::GoHome) => {
                e.prevent_default();
                nav.navigate_to(Page::Home);
            }
            Some(LabShortcut::CloseTool) if active.get_untracked().is_some() => {
                set_active.set(None);
            }
            _ => {}
        }
    });

    let open = Callback::new(move |tool: LabTool| set_active.set(Some(tool)));
    let close = Callback::new(move |_: ()| set_active.set(None));

    view! {
        <Title text="Lab" />
        <section class="py-20 px-4">
            <div class="max-w-4xl mx-auto text-center space-y-8">
                <h1 class="text-4xl md:text-6xl tracking-tight">
                    <span class="text-primary">"$"</span>
                    " Som.LAB"
                    <span class="cursor"></span>
                </h1>
                <h2 class="text-xl md:text-2xl text-muted-foreground">
                    "Experimental Digital Playground"
                </h2>
                <div class="flex items-center justify-center space-x-2 text-sm text-muted-foreground/60">
                    <span class="w-2 h-2 bg-primary rounded-full animate-pulse"></span>
                    <span>"Standalone Lab Environment"</span>
                    <span class="text-primary">"|"</span>
                    <span>"Bookmark this page"</span>
                </div>
                <div class="bg-card border border-border rounded-lg p-4 hover:border-primary/50 transition-colors max-w-2xl mx-auto">
                    <RotatingTagline />
                </div>
            </div>
        </section>

        <section class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <DefHeading name="developer_tools" />
                <div class="grid md:grid-cols-2 gap-6">
                    {LAB_TOOLS
                        .iter()
                        .map(|card| view! { <ToolCard card=*card open /> })
                        .collect_view()}
                </div>
            </div>
        </section>

        {move || {
            active
                .get()
                .map(|tool| view! { <ToolModal tool on_close=close /> })
        }}

        <section class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <DefHeading name="future_tools" />
                <div class="grid md:grid-cols-3 gap-6">
                    {FUTURE_TOOLS
                        .iter()
                        .map(|card| view! { <ToolCard card=*card open /> })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <div class="bg-card border border-border rounded-lg p-8 hover:border-primary/50 transition-colors text-center space-y-4">
                    <i class="extra-terminal text-5xl text-primary" />
                    <h2 class="text-2xl">
                        <span class="text-primary">"while"</span>
                        " (coding) "
                        <span class="text-primary">"{"</span>
                    </h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "This lab is constantly evolving. New experiments, tools, and AI projects are being added regularly. Check back soon for more interactive demos and utilities!"
                    </p>
                    <div class="pt-4">
                        <span class="text-primary">"}"</span>
                    </div>
                </div>
            </div>
        </section>

        <section class="py-8 px-4 border-t border-border/50">
            <div class="max-w-4xl mx-auto flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                <div class="text-sm text-muted-foreground">
                    <span class="text-primary">"$"</span>
                    " Som.LAB v1.0 - Independent Environment"
                </div>
                <div class="text-xs text-muted-foreground/60 flex items-center space-x-4">
                    <span>"Keyboard shortcuts:"</span>
                    <kbd class="px-2 py-1 bg-muted rounded text-xs">"Ctrl+H"</kbd>
                    <span>"→ Home"</span>
                    <kbd class="px-2 py-1 bg-muted rounded text-xs">"Esc"</kbd>
                    <span>"→ Close tool"</span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DefHeading(name: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-2xl md:text-3xl mb-12 text-center">
            <span class="text-primary">"def"</span>
            " "
            {name}
            <span class="text-primary">"():"</span>
        </h2>
    }
}

#[component]
fn ToolCard(card: LabToolCard, open: Callback<LabTool>) -> impl IntoView {
    let (clickable, label) = match card.status {
        ToolStatus::Available(_) => ("cursor-pointer", "Open Tool"),
        ToolStatus::ComingSoon => ("", "Coming Soon"),
    };
    let on_click = move |_| {
        if let ToolStatus::Available(tool) = card.status {
            open.run(tool);
        }
    };

    view! {
        <div
            class=format!(
                "bg-card border border-border rounded-lg p-6 hover:border-primary/50 transition-colors space-y-3 {clickable}",
            )
            on:click=on_click
        >
            <div class="flex justify-center">
                <i class=format!("{} text-3xl text-primary", card.icon.class()) />
            </div>
            <h3 class="text-lg text-center">{card.title}</h3>
            <p class="text-muted-foreground text-sm text-center">{card.description}</p>
            <div class="flex justify-center">
                <button
                    class="px-3 py-1 text-sm rounded-md border border-border hover:bg-accent transition-colors disabled:opacity-60"
                    disabled=matches!(card.status, ToolStatus::ComingSoon)
                >
                    {label}
                </button>
            </div>
        </div>
    }
}

#[component]
fn ToolModal(tool: LabTool, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 bg-black/50 backdrop-blur-sm flex items-center justify-center p-4">
            <div class="w-full max-w-7xl h-full max-h-[85vh] bg-background rounded-lg border border-border overflow-hidden shadow-2xl flex flex-col">
                <div class="flex justify-between items-center p-4 border-b border-border bg-card/50 backdrop-blur-sm shrink-0">
                    <h3 class="text-lg font-semibold flex items-center space-x-2">
                        <span class="text-primary">"$"</span>
                        <span>{modal_title(tool)}</span>
                    </h3>
                    <div class="flex items-center space-x-2">
                        <button
                            class="px-3 py-1 text-sm rounded-md border border-border hover:bg-accent"
                            on:click=move |_| on_close.run(())
                        >
                            "Minimize"
                        </button>
                        <button
                            class="px-3 py-1 text-sm rounded-md hover:bg-red-600 hover:text-white"
                            aria-label="Close tool"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                </div>
                <div class="flex-1 overflow-auto">
                    {match tool {
                        LabTool::TextUtility => Either::Left(view! { <TextTool /> }),
                        LabTool::Notepad => Either::Right(view! { <Notepad /> }),
                    }}
                </div>
            </div>
        </div>
    }
}
