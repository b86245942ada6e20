//! Transient success/error banners for form screens.
//!
//! A flash is tagged with a sequence number so the delayed clear only removes
//! the message it was scheduled for, never a newer one.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::util::lifetime::spawn_browser;

/// How long a success message stays visible.
pub const FLASH_CLEAR_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "flash flash--success",
            Self::Error => "flash flash--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    pub message: Option<(FlashKind, String)>,
    pub seq: u64,
}

impl FlashState {
    /// Show `text` and return the sequence number identifying it.
    pub fn show(&mut self, kind: FlashKind, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some((kind, text.into()));
        self.seq
    }

    /// Clear the banner only if it still shows message `seq`.
    pub fn clear_if(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

/// Show an error; errors stay until the next action.
pub fn flash_error(flash: RwSignal<FlashState>, text: impl Into<String>) {
    let text = text.into();
    flash.update(|f| {
        f.show(FlashKind::Error, text);
    });
}

/// Show a success message and clear it after `FLASH_CLEAR_DELAY`.
pub fn flash_success(flash: RwSignal<FlashState>, text: impl Into<String>) {
    let text = text.into();
    let mut seq = 0;
    flash.update(|f| seq = f.show(FlashKind::Success, text));

    spawn_browser(async move {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(FLASH_CLEAR_DELAY).await;
        flash.try_update(|f| f.clear_if(seq));
    });
}
