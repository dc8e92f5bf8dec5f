use chrono::{Local, Utc};
use leptos::{html, prelude::*};
use leptos_use::{use_clipboard, use_debounce_fn, UseClipboardReturn};
use web_sys::HtmlInputElement;

use crate::app::browser::{download_text, read_file_text};
use crate::app::storage::persisted;
use crate::lab::notepad::{
    download_name, file_name_or_default, parse_upload_name, upload_accept, BufferStats,
    EditorSession, Language, SavedFile, SavedFiles, AUTOSAVE_DELAY_MS, DEFAULT_FILE_NAME,
    LAST_SESSION_KEY, SAVED_FILES_KEY, WELCOME_CODE,
};

const BUTTON: &str =
    "px-3 py-1 text-sm rounded-md border border-border hover:bg-accent transition-colors";

#[component]
pub fn Notepad() -> impl IntoView {
    let (code, set_code) = signal(WELCOME_CODE.to_string());
    let (language, set_language) = signal(Language::default());
    let (file_name, set_file_name) = signal(DEFAULT_FILE_NAME.to_string());
    let (auto_save, set_auto_save) = signal(true);
    let (dark_editor, set_dark_editor) = signal(true);
    let (last_saved, set_last_saved) = signal(None::<String>);

    let (last_session, set_last_session) = persisted::<Option<EditorSession>>(LAST_SESSION_KEY);
    let (saved, set_saved) = persisted::<SavedFiles>(SAVED_FILES_KEY);

    // Pick up where the last visit left off, once.
    let restored = StoredValue::new(false);
    Effect::watch(
        move || last_session.get(),
        move |session, _, _| {
            if restored.get_value() {
                return;
            }
            if let Some(session) = session {
                let (code, lang, name) = session.restore(
                    &code.get_untracked(),
                    &file_name.get_untracked(),
                );
                set_code.set(code);
                set_language.set(lang);
                set_file_name.set(name);
                restored.set_value(true);
            }
        },
        true,
    );

    let autosave = use_debounce_fn(
        move || {
            let session = code.with_untracked(|code| {
                file_name.with_untracked(|name| {
                    EditorSession::capture(code, language.get_untracked(), name, Utc::now())
                })
            });
            set_last_session.set(Some(session));
            set_last_saved.set(Some(Local::now().format("%H:%M:%S").to_string()));
        },
        AUTOSAVE_DELAY_MS,
    );
    Effect::new(move |_| {
        code.track();
        language.track();
        file_name.track();
        if auto_save.get() {
            autosave();
        }
    });

    let save = move |_| {
        let name = file_name.get_untracked();
        set_saved.update(|files| {
            let entry = files.upsert(
                &name,
                language.get_untracked(),
                &code.get_untracked(),
                Utc::now(),
            );
            log::info!("saved `{}` ({})", entry.name, entry.id);
        });
        set_file_name.set(file_name_or_default(&name).to_string());
    };

    let load = move |file: &SavedFile| {
        set_code.set(file.code.clone());
        set_language.set(file.language);
        set_file_name.set(file.name.clone());
    };

    let delete = move |id: &str| {
        set_saved.update(|files| {
            files.remove(id);
        });
    };

    let picker = NodeRef::<html::Input>::new();
    let upload = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let (stem, detected) = parse_upload_name(&file.name());
        let read = read_file_text(&file, move |text| {
            set_code.set(text);
            set_file_name.set(stem);
            if let Some(lang) = detected {
                set_language.set(lang);
            }
        });
        if let Err(e) = read {
            log::error!("couldn't read {}: {e}", file.name());
        }
        input.set_value("");
    };

    let download = move |_| {
        let name = download_name(&file_name.get_untracked(), language.get_untracked());
        if let Err(e) = code.with_untracked(|code| download_text(&name, code)) {
            log::error!("download failed: {e}");
        }
    };

    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();
    let copy_code = move |_| {
        if is_supported.get_untracked() {
            copy(&code.get_untracked());
        } else {
            log::warn!("clipboard is not available");
        }
    };

    let clear = move |_| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to clear the editor?")
            .unwrap_or(false);
        if confirmed {
            set_code.set(String::new());
            set_file_name.set(DEFAULT_FILE_NAME.to_string());
        }
    };

    let stats = Memo::new(move |_| code.with(|c| BufferStats::of(c)));
    let accept = upload_accept();

    view! {
        <div class="h-full flex flex-col lg:flex-row">
            <div class="flex-1 flex flex-col min-h-0">
                <div class="flex flex-wrap items-center gap-2 p-3 border-b border-border bg-card/50">
                    <input
                        type="text"
                        class="px-2 py-1 text-sm bg-background border border-border rounded-md w-40"
                        placeholder="File name"
                        prop:value=file_name
                        on:input=move |ev| set_file_name.set(event_target_value(&ev))
                    />
                    <select
                        class="px-2 py-1 text-sm bg-background border border-border rounded-md"
                        on:change=move |ev| {
                            set_language.set(Language::from(event_target_value(&ev).as_str()))
                        }
                    >
                        {Language::ALL
                            .into_iter()
                            .map(|lang| {
                                view! {
                                    <option value=lang.tag() selected=move || language.get() == lang>
                                        {lang.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button class=BUTTON on:click=save>"Save"</button>
                    <button
                        class=BUTTON
                        on:click=move |_| {
                            if let Some(input) = picker.get() {
                                input.click();
                            }
                        }
                    >
                        "Upload"
                    </button>
                    <input
                        node_ref=picker
                        type="file"
                        class="hidden"
                        accept=accept
                        on:change=upload
                    />
                    <button class=BUTTON on:click=download>"Download"</button>
                    <button class=BUTTON on:click=copy_code>"Copy"</button>
                    <button class=BUTTON on:click=clear>"Clear"</button>
                    <button class=BUTTON on:click=move |_| set_dark_editor.update(|d| *d = !*d)>
                        {move || if dark_editor.get() { "☀ Light" } else { "☾ Dark" }}
                    </button>
                    <label class="flex items-center gap-1 text-sm text-muted-foreground">
                        <input
                            type="checkbox"
                            prop:checked=auto_save
                            on:change=move |ev| set_auto_save.set(event_target_checked(&ev))
                        />
                        "Auto-save"
                    </label>
                    <Show when=move || copied.get()>
                        <span class="text-xs text-primary">"Copied!"</span>
                    </Show>
                </div>

                <textarea
                    class=move || {
                        let palette = if dark_editor.get() {
                            "bg-neutral-900 text-neutral-100"
                        } else {
                            "bg-white text-neutral-900"
                        };
                        format!("flex-1 min-h-[24rem] w-full p-4 font-mono text-sm resize-none focus:outline-none {palette}")
                    }
                    spellcheck="false"
                    prop:value=code
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />

                <div class="flex flex-wrap justify-between gap-2 px-3 py-1 text-xs text-muted-foreground border-t border-border bg-card/50">
                    <span>
                        {move || {
                            let BufferStats { lines, chars } = stats.get();
                            format!("Lines: {lines} • Characters: {chars} • {}", language.get().label())
                        }}
                    </span>
                    <span>
                        {move || match last_saved.get() {
                            Some(at) => format!("Last saved: {at}"),
                            None if auto_save.get() => "Auto-save on".to_string(),
                            None => "Auto-save off".to_string(),
                        }}
                    </span>
                </div>
            </div>

            <aside class="lg:w-64 border-t lg:border-t-0 lg:border-l border-border p-3 space-y-2 overflow-auto">
                <h4 class="text-sm text-primary">"Saved files"</h4>
                <Show
                    when=move || !saved.with(SavedFiles::is_empty)
                    fallback=|| view! { <p class="text-xs text-muted-foreground">"Nothing saved yet"</p> }
                >
                    <For
                        each=move || saved.with(|files| files.iter().cloned().collect::<Vec<_>>())
                        key=|file| file.id.clone()
                        children=move |file: SavedFile| {
                            let id = file.id.clone();
                            let saved_at = file.timestamp.with_timezone(&Local).format("%b %-d %H:%M").to_string();
                            let on_load = {
                                let file = file.clone();
                                move |_| load(&file)
                            };
                            view! {
                                <div class="flex items-center justify-between gap-2 p-2 bg-card border border-border rounded-md">
                                    <button
                                        class="flex-1 text-left min-w-0"
                                        on:click=on_load
                                    >
                                        <p class="text-sm truncate">{file.name.clone()}</p>
                                        <p class="text-xs text-muted-foreground">
                                            {file.language.label()} " • " {saved_at}
                                        </p>
                                    </button>
                                    <button
                                        class="text-xs px-2 py-1 rounded hover:bg-red-600 hover:text-white"
                                        aria-label="Delete saved file"
                                        on:click=move |_| delete(&id)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </Show>
            </aside>
        </div>
    }
}
