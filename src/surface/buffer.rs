use std::sync::Mutex;

use crate::{misc::log::targets, surface::Surface};

/// A surface held in memory.
#[derive(Debug, Default)]
pub struct BufferSurface {
    fragments: Mutex<Vec<String>>,
}

impl BufferSurface {
    /// Everything shown since the most recent clear, as one string.
    pub fn contents(&self) -> String {
        self.fragments().concat()
    }

    /// The fragments shown since the most recent clear, in the order shown.
    pub fn fragments(&self) -> Vec<String> {
        match self.fragments.lock() {
            Ok(fragments) => fragments.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn with_fragments(&self, f: impl FnOnce(&mut Vec<String>)) {
        match self.fragments.lock() {
            Ok(mut fragments) => f(&mut fragments),
            Err(poisoned) => {
                log::warn!(target: targets::RENDER, "Recovered a poisoned buffer");
                f(&mut poisoned.into_inner())
            }
        }
    }
}

impl Surface for BufferSurface {
    fn clear(&self) {
        self.with_fragments(|fragments| fragments.clear());
    }

    fn show(&self, markup: &str) {
        self.with_fragments(|fragments| fragments.push(markup.to_string()));
    }
}
