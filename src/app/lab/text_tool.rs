use leptos::prelude::*;
use leptos_use::{use_clipboard, UseClipboardReturn};
use web_sys::HtmlInputElement;

use crate::app::browser::{download_text, read_file_text};
use crate::lab::text_ops::{TextOp, TextStats, DOWNLOAD_NAME, UPLOAD_ACCEPT};

const BUTTON: &str =
    "px-3 py-1 text-sm rounded-md border border-border hover:bg-accent transition-colors disabled:opacity-50";

#[component]
pub fn TextTool() -> impl IntoView {
    let (input, set_input) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let stats = Memo::new(move |_| input.with(|text| TextStats::of(text)));

    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();

    let copy_text = move |text: String| {
        if is_supported.get_untracked() {
            copy(&text);
        } else {
            log::warn!("clipboard is not available");
        }
    };
    let copy_input = {
        let copy_text = copy_text.clone();
        move |_| copy_text(input.get_untracked())
    };
    let copy_output = move |_| copy_text(output.get_untracked());

    let download = move |_| {
        let contents = output.with_untracked(|out| {
            if out.is_empty() {
                input.get_untracked()
            } else {
                out.clone()
            }
        });
        if let Err(e) = download_text(DOWNLOAD_NAME, &contents) {
            log::error!("download failed: {e}");
        }
    };

    let upload = move |ev: leptos::ev::Event| {
        let picker: HtmlInputElement = event_target(&ev);
        let Some(file) = picker.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = read_file_text(&file, move |text| set_input.set(text)) {
            log::error!("couldn't read {}: {e}", file.name());
        }
        // let the same file be picked again
        picker.set_value("");
    };

    view! {
        <div class="p-6 space-y-6">
            <div class="grid lg:grid-cols-2 gap-6">
                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <label class="text-sm text-primary">"Input"</label>
                        <div class="flex gap-2">
                            <label class=format!("{BUTTON} cursor-pointer")>
                                "Upload"
                                <input
                                    type="file"
                                    class="hidden"
                                    accept=UPLOAD_ACCEPT
                                    on:change=upload
                                />
                            </label>
                            <button class=BUTTON on:click=copy_input>"Copy"</button>
                            <button
                                class=BUTTON
                                on:click=move |_| {
                                    set_input.set(String::new());
                                    set_output.set(String::new());
                                }
                            >
                                "Clear"
                            </button>
                        </div>
                    </div>
                    <textarea
                        class="w-full h-64 p-3 bg-card border border-border rounded-md resize-none focus:outline-none focus:border-primary/50"
                        placeholder="Enter your text here..."
                        prop:value=input
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                    />
                    <p class="text-xs text-muted-foreground">
                        {move || {
                            let TextStats { words, chars } = stats.get();
                            format!("{words} words • {chars} characters")
                        }}
                    </p>
                </div>

                <div class="space-y-2">
                    <div class="flex items-center justify-between">
                        <label class="text-sm text-primary">"Output"</label>
                        <div class="flex gap-2 items-center">
                            <Show when=move || copied.get()>
                                <span class="text-xs text-primary">"Copied!"</span>
                            </Show>
                            <button
                                class=BUTTON
                                disabled=move || output.with(String::is_empty)
                                on:click=copy_output
                            >
                                "Copy"
                            </button>
                            <button class=BUTTON on:click=download>"Download"</button>
                        </div>
                    </div>
                    <textarea
                        class="w-full h-64 p-3 bg-muted border border-border rounded-md resize-none"
                        placeholder="Processed text will appear here..."
                        readonly=true
                        prop:value=output
                    />
                </div>
            </div>

            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-2">
                {TextOp::ALL
                    .into_iter()
                    .map(|op| {
                        view! {
                            <button
                                class=BUTTON
                                on:click=move |_| {
                                    set_output.set(input.with_untracked(|text| op.apply(text)))
                                }
                            >
                                {op.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
