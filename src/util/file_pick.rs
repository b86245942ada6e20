//! Browser file-input glue for resume uploads.
//!
//! `picked_file` takes the selected file off an `<input type="file">` change
//! event; `PickedFile::read` loads it into a `ResumeFile` the API client can
//! send. Off the browser nothing can be picked, so `PickedFile` is empty.

use crate::net::error::TransportError;
use crate::net::types::ResumeFile;

#[cfg(feature = "hydrate")]
pub struct PickedFile(web_sys::File);

#[cfg(not(feature = "hydrate"))]
pub enum PickedFile {}

/// First file of the input that fired `ev`. The input is reset so picking the
/// same file again fires another change event.
#[cfg(feature = "hydrate")]
pub fn picked_file(ev: &leptos::ev::Event) -> Option<PickedFile> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    input.set_value("");
    Some(PickedFile(file))
}

#[cfg(not(feature = "hydrate"))]
pub fn picked_file(_ev: &leptos::ev::Event) -> Option<PickedFile> {
    None
}

impl PickedFile {
    /// Read the whole file into memory.
    ///
    /// # Errors
    ///
    /// `TransportError::Network` when the browser fails to read the blob.
    #[cfg(feature = "hydrate")]
    pub async fn read(self) -> Result<ResumeFile, TransportError> {
        let buffer = wasm_bindgen_futures::JsFuture::from(self.0.array_buffer())
            .await
            .map_err(|e| TransportError::Network(format!("{e:?}")))?;
        Ok(ResumeFile {
            name: self.0.name(),
            content_type: self.0.type_(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        })
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    pub async fn read(self) -> Result<ResumeFile, TransportError> {
        match self {}
    }
}

/// Current time as an ISO 8601 string, when a clock is available.
#[must_use]
pub fn now_timestamp() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().as_string()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
