//! Drag-and-drop upload zone with async image preview.
//!
//! DESIGN
//! ======
//! The zone wraps a hidden file input. Clicks forward to the native file
//! browser; drops assign the dropped list to the input, so either way the
//! chosen file rides along with the native form post. Preview reads are
//! awaited and carry a generation number: a completion whose generation is
//! stale is dropped, so reselecting while a slow read is pending can never
//! clobber the newer choice.

use leptos::prelude::*;

use crate::util::upload::{FilePreview, ReadGeneration};

#[component]
pub fn UploadArea() -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let dragging = RwSignal::new(false);
    let preview = RwSignal::new(None::<FilePreview>);
    let read_generation = RwSignal::new(ReadGeneration::default());
    #[cfg(not(feature = "hydrate"))]
    let _ = read_generation;

    let on_zone_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let file = input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| {
                    crate::util::upload::first_file_index(files.length())
                        .and_then(|index| files.get(index))
                });
            if let Some(file) = file {
                start_preview_read(&file, preview, read_generation);
            }
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(true);
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        {
            let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) else {
                return;
            };
            // A drop with no files (text, links) changes nothing.
            let Some(index) = crate::util::upload::first_file_index(files.length()) else {
                return;
            };
            if let Some(input) = input_ref.get_untracked() {
                input.set_files(Some(&files));
            }
            if let Some(file) = files.get(index) {
                start_preview_read(&file, preview, read_generation);
            }
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || dragging.get()
            on:click=on_zone_click
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-area__prompt">
                <p class="mb-0">"Drag and drop an X-ray image here, or click to browse"</p>
            </div>
            <input
                node_ref=input_ref
                class="d-none"
                type="file"
                name="image"
                on:change=on_change
                on:click=|ev| ev.stop_propagation()
            />
            {move || {
                preview.get().map(|FilePreview { name, size_label, data_url }| {
                    view! {
                        <div class="image-preview mt-3">
                            <div class="card">
                                <img class="card-img-top" src=data_url alt=name.clone() />
                                <div class="card-body">
                                    <h6 class="card-title">{name}</h6>
                                    <p class="card-text text-muted">{size_label}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn start_preview_read(
    file: &web_sys::File,
    preview: RwSignal<Option<FilePreview>>,
    read_generation: RwSignal<ReadGeneration>,
) {
    let stamp = read_generation.get_untracked().advance();
    read_generation.set(stamp);
    let name = file.name();
    let size = file.size();
    let file = file.clone();
    leptos::task::spawn_local(async move {
        let Ok(data_url) = crate::util::upload::read_as_data_url(&file).await else {
            return;
        };
        if !stamp.is_current(read_generation.get_untracked()) {
            // A newer selection superseded this read.
            return;
        }
        preview.set(Some(FilePreview::new(name, size, data_url)));
    });
}
