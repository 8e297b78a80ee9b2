//! Async file reading for upload previews.
//!
//! Wraps the browser `FileReader` callback API in an awaitable future so
//! upload components can read a selected image as a data URL without nesting
//! callbacks. Only the read itself needs a browser; which file a selection
//! handles and which of two overlapping reads publishes are plain rules here.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::util::format::format_file_size;

/// Snapshot of a selected file, ready to render as a preview card.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    pub name: String,
    pub size_label: String,
    pub data_url: String,
}

impl FilePreview {
    /// Build a preview from the raw file metadata and an already-read data URL.
    pub fn new(name: impl Into<String>, size_bytes: f64, data_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_label: format_file_size(size_bytes),
            data_url: data_url.into(),
        }
    }
}

/// Generation stamp for overlapping preview reads.
///
/// The upload component holds the stamp of the read it last started; each new
/// selection advances it. A completed read publishes its preview only while
/// its own stamp is still the latest, so reselecting during a slow read
/// discards the older result instead of racing it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadGeneration(u64);

impl ReadGeneration {
    /// The stamp for the next read to start, superseding any pending one.
    pub fn advance(self) -> ReadGeneration {
        ReadGeneration(self.0 + 1)
    }

    /// Whether this stamp still marks the latest read.
    pub fn is_current(self, latest: ReadGeneration) -> bool {
        self == latest
    }
}

/// Index of the file a new selection handles.
///
/// Only the first file of a list is ever read; a list with no files at all
/// (a drop of text or links) selects nothing.
pub fn first_file_index(count: u32) -> Option<u32> {
    (count > 0).then_some(0)
}

/// Read a file's contents as a `data:` URL.
///
/// Resolves when the underlying `FileReader` fires `load` or `error`. The
/// caller decides whether the result is still wanted; a read that loses that
/// race is simply dropped.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader =
        web_sys::FileReader::new().map_err(|_| "file reader unavailable".to_owned())?;
    let (tx, rx) = futures::channel::oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = Rc::clone(&tx);
        let reader = reader.clone();
        Closure::<dyn FnMut()>::new(move || {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| "file read produced no data".to_owned());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err("file read failed".to_owned()));
            }
        })
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|_| "file read failed to start".to_owned())?;

    let outcome = rx.await.map_err(|_| "file read interrupted".to_owned());
    reader.set_onload(None);
    reader.set_onerror(None);
    outcome?
}
