//! # Ratings Gate
//!
//! Decides whether the "rate the app" step is offered. It depends on two
//! answers from the platform's app-store detection and on the build mode.

use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Answers questions about the platform's app store.
pub trait StoreDetector: Send + Sync {
    fn is_store_installed(&self) -> bool;

    fn was_installed_from_store(&self) -> bool;
}

/// A detector with fixed answers, typically read from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticStoreDetector {
    pub installed: bool,
    pub installed_from_store: bool,
}

impl StoreDetector for StaticStoreDetector {
    fn is_store_installed(&self) -> bool {
        self.installed
    }

    fn was_installed_from_store(&self) -> bool {
        self.installed_from_store
    }
}

/// Debug or release build. Read once per process, never changed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// The mode this binary was compiled in.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    pub fn is_debug(self) -> bool {
        self == BuildMode::Debug
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Clone)]
pub struct RatingsGate {
    detector: Arc<dyn StoreDetector>,
    build_mode: BuildMode,
}

impl RatingsGate {
    pub fn new(detector: Arc<dyn StoreDetector>, build_mode: BuildMode) -> Self {
        Self {
            detector,
            build_mode,
        }
    }

    pub fn can_show_ratings_button(&self) -> bool {
        if !self.detector.is_store_installed() {
            info!("App store not installed");
            return false;
        }

        if self.detector.was_installed_from_store() {
            return true;
        }

        if self.build_mode.is_debug() {
            info!("Not installed from the app store but this is a debug build; treating as installed from the store");
            return true;
        }

        false
    }
}
