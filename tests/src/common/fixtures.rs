//! Landing page fixtures

use adamftd_core::{NavigationTarget, Navigator, TypeaheadConfig, UserProfile};
use adamftd_suggestions::StaticSuggestionProvider;
use adamftd_typeahead::{SessionHandle, TypeaheadSession};
use anyhow::Result;
use std::sync::{Arc, Mutex};

/// Navigator that remembers every URL it was asked to open
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .map(|visited| visited.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &NavigationTarget) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(target.to_url());
        }
    }
}

/// Everything a landing page holds for one signed-in user
pub struct LandingPage {
    pub profile: UserProfile,
    pub search: SessionHandle,
    pub navigator: Arc<RecordingNavigator>,
}

impl LandingPage {
    /// Open the landing page with the built-in suggestion catalogue
    pub fn open(profile: UserProfile, config: TypeaheadConfig) -> Result<Self> {
        let provider = Arc::new(StaticSuggestionProvider::with_default_catalogue(8)?);
        let navigator = Arc::new(RecordingNavigator::default());
        let search = TypeaheadSession::spawn(config, provider, Arc::clone(&navigator));
        Ok(Self {
            profile,
            search,
            navigator,
        })
    }

    /// The demo account used on the landing page
    pub fn demo_profile() -> UserProfile {
        UserProfile::new("Maria", "exporter", "PRO")
    }
}
