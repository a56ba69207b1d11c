//! # Feedback Reasons
//!
//! The two-level classification for negative feedback.
//!
//! ```text
//! MainReason
//! ├── MissingBrowsingFeatures  → MissingBrowsingFeaturesSubReason
//! ├── WebsitesNotLoading       (no sub-reasons, goes to the broken-site screen)
//! ├── SearchNotGoodEnough      → SearchNotGoodEnoughSubReason
//! ├── NotEnoughCustomizations  → CustomizationSubReason
//! ├── AppIsSlowOrBuggy         → PerformanceSubReason
//! └── Other                    (no sub-reasons, goes straight to open-ended)
//! ```
//!
//! Every value has a stable snake_case wire name. The same names are used
//! in submission payloads and in host commands.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Error returned when a wire name does not match any known reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReason(pub String);

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reason: {}", self.0)
    }
}

impl std::error::Error for UnknownReason {}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainReason {
    #[serde(rename = "missing_features")]
    MissingBrowsingFeatures,
    #[serde(rename = "site_breakage")]
    WebsitesNotLoading,
    #[serde(rename = "search_not_good")]
    SearchNotGoodEnough,
    #[serde(rename = "customization")]
    NotEnoughCustomizations,
    #[serde(rename = "performance")]
    AppIsSlowOrBuggy,
    #[serde(rename = "other")]
    Other,
}

impl MainReason {
    pub const ALL: [MainReason; 6] = [
        MainReason::MissingBrowsingFeatures,
        MainReason::WebsitesNotLoading,
        MainReason::SearchNotGoodEnough,
        MainReason::NotEnoughCustomizations,
        MainReason::AppIsSlowOrBuggy,
        MainReason::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MainReason::MissingBrowsingFeatures => "missing_features",
            MainReason::WebsitesNotLoading => "site_breakage",
            MainReason::SearchNotGoodEnough => "search_not_good",
            MainReason::NotEnoughCustomizations => "customization",
            MainReason::AppIsSlowOrBuggy => "performance",
            MainReason::Other => "other",
        }
    }

    /// Human-readable label for the reason picker.
    pub fn label(self) -> &'static str {
        match self {
            MainReason::MissingBrowsingFeatures => "Missing browsing features",
            MainReason::WebsitesNotLoading => "Websites are not loading",
            MainReason::SearchNotGoodEnough => "Search is not good enough",
            MainReason::NotEnoughCustomizations => "Not enough ways to customize",
            MainReason::AppIsSlowOrBuggy => "App is slow or buggy",
            MainReason::Other => "None of these",
        }
    }

    /// Sub-reasons offered for this main reason. Empty when the reason
    /// skips the sub-reason screen.
    pub fn sub_reasons(self) -> Vec<SubReason> {
        match self {
            MainReason::MissingBrowsingFeatures => MissingBrowsingFeaturesSubReason::ALL
                .iter()
                .map(|s| SubReason::MissingBrowsingFeatures(*s))
                .collect(),
            MainReason::SearchNotGoodEnough => SearchNotGoodEnoughSubReason::ALL
                .iter()
                .map(|s| SubReason::SearchNotGoodEnough(*s))
                .collect(),
            MainReason::NotEnoughCustomizations => CustomizationSubReason::ALL
                .iter()
                .map(|s| SubReason::NotEnoughCustomizations(*s))
                .collect(),
            MainReason::AppIsSlowOrBuggy => PerformanceSubReason::ALL
                .iter()
                .map(|s| SubReason::AppIsSlowOrBuggy(*s))
                .collect(),
            MainReason::WebsitesNotLoading | MainReason::Other => Vec::new(),
        }
    }

    pub fn has_sub_reasons(self) -> bool {
        !matches!(self, MainReason::WebsitesNotLoading | MainReason::Other)
    }
}

impl fmt::Display for MainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainReason {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainReason::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownReason(s.to_string()))
    }
}

// ============================================================================
// Reason-specific sub-reasons
// ============================================================================

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingBrowsingFeaturesSubReason {
    #[serde(rename = "navigation")]
    NavigationIssues,
    #[serde(rename = "tab_management")]
    TabManagement,
    #[serde(rename = "ad_popups")]
    AdPopupBlocking,
    #[serde(rename = "videos")]
    WatchingVideos,
    #[serde(rename = "images")]
    InteractingImages,
    #[serde(rename = "bookmarks")]
    BookmarkManagement,
    #[serde(rename = "other")]
    Other,
}

impl MissingBrowsingFeaturesSubReason {
    pub const ALL: [Self; 7] = [
        Self::NavigationIssues,
        Self::TabManagement,
        Self::AdPopupBlocking,
        Self::WatchingVideos,
        Self::InteractingImages,
        Self::BookmarkManagement,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NavigationIssues => "navigation",
            Self::TabManagement => "tab_management",
            Self::AdPopupBlocking => "ad_popups",
            Self::WatchingVideos => "videos",
            Self::InteractingImages => "images",
            Self::BookmarkManagement => "bookmarks",
            Self::Other => "other",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchNotGoodEnoughSubReason {
    #[serde(rename = "technical")]
    ProgrammingTechnicalSearches,
    #[serde(rename = "layout")]
    LayoutMoreLikeGoogle,
    #[serde(rename = "load_time")]
    FasterLoadTimes,
    #[serde(rename = "language_region")]
    SearchingInSpecificLanguage,
    #[serde(rename = "autocomplete")]
    BetterAutocomplete,
    #[serde(rename = "other")]
    Other,
}

impl SearchNotGoodEnoughSubReason {
    pub const ALL: [Self; 6] = [
        Self::ProgrammingTechnicalSearches,
        Self::LayoutMoreLikeGoogle,
        Self::FasterLoadTimes,
        Self::SearchingInSpecificLanguage,
        Self::BetterAutocomplete,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProgrammingTechnicalSearches => "technical",
            Self::LayoutMoreLikeGoogle => "layout",
            Self::FasterLoadTimes => "load_time",
            Self::SearchingInSpecificLanguage => "language_region",
            Self::BetterAutocomplete => "autocomplete",
            Self::Other => "other",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomizationSubReason {
    #[serde(rename = "home_screen")]
    HomeScreenConfiguration,
    #[serde(rename = "tabs")]
    TabDisplay,
    #[serde(rename = "ui")]
    HowAppLooks,
    #[serde(rename = "which_data_cleared")]
    WhichDataIsCleared,
    #[serde(rename = "when_data_cleared")]
    WhenDataIsCleared,
    #[serde(rename = "bookmarks")]
    BookmarkDisplay,
    #[serde(rename = "other")]
    Other,
}

impl CustomizationSubReason {
    pub const ALL: [Self; 7] = [
        Self::HomeScreenConfiguration,
        Self::TabDisplay,
        Self::HowAppLooks,
        Self::WhichDataIsCleared,
        Self::WhenDataIsCleared,
        Self::BookmarkDisplay,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HomeScreenConfiguration => "home_screen",
            Self::TabDisplay => "tabs",
            Self::HowAppLooks => "ui",
            Self::WhichDataIsCleared => "which_data_cleared",
            Self::WhenDataIsCleared => "when_data_cleared",
            Self::BookmarkDisplay => "bookmarks",
            Self::Other => "other",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceSubReason {
    #[serde(rename = "slow_web_pages")]
    SlowWebPageLoads,
    #[serde(rename = "crashes")]
    AppCrashesOrFreezes,
    #[serde(rename = "video_playback")]
    MediaPlaybackBugs,
    #[serde(rename = "other")]
    Other,
}

impl PerformanceSubReason {
    pub const ALL: [Self; 4] = [
        Self::SlowWebPageLoads,
        Self::AppCrashesOrFreezes,
        Self::MediaPlaybackBugs,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SlowWebPageLoads => "slow_web_pages",
            Self::AppCrashesOrFreezes => "crashes",
            Self::MediaPlaybackBugs => "video_playback",
            Self::Other => "other",
        }
    }
}

/// A sub-reason, tagged with the main reason it belongs to.
///
/// Serializes as the bare wire name of the inner value.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SubReason {
    MissingBrowsingFeatures(MissingBrowsingFeaturesSubReason),
    SearchNotGoodEnough(SearchNotGoodEnoughSubReason),
    NotEnoughCustomizations(CustomizationSubReason),
    AppIsSlowOrBuggy(PerformanceSubReason),
}

impl SubReason {
    pub fn main_reason(self) -> MainReason {
        match self {
            SubReason::MissingBrowsingFeatures(_) => MainReason::MissingBrowsingFeatures,
            SubReason::SearchNotGoodEnough(_) => MainReason::SearchNotGoodEnough,
            SubReason::NotEnoughCustomizations(_) => MainReason::NotEnoughCustomizations,
            SubReason::AppIsSlowOrBuggy(_) => MainReason::AppIsSlowOrBuggy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubReason::MissingBrowsingFeatures(s) => s.as_str(),
            SubReason::SearchNotGoodEnough(s) => s.as_str(),
            SubReason::NotEnoughCustomizations(s) => s.as_str(),
            SubReason::AppIsSlowOrBuggy(s) => s.as_str(),
        }
    }

    /// Looks up a sub-reason by wire name within the options of `main_reason`.
    pub fn parse(main_reason: MainReason, name: &str) -> Result<SubReason, UnknownReason> {
        main_reason
            .sub_reasons()
            .into_iter()
            .find(|s| s.as_str() == name)
            .ok_or_else(|| UnknownReason(format!("{main_reason}/{name}")))
    }
}

impl fmt::Display for SubReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_reason_wire_names_round_trip() {
        for reason in MainReason::ALL {
            assert_eq!(reason.as_str().parse::<MainReason>(), Ok(reason));
        }
        assert!("nope".parse::<MainReason>().is_err());
    }

    #[test]
    fn test_only_two_reasons_skip_sub_reasons() {
        let without: Vec<_> = MainReason::ALL
            .into_iter()
            .filter(|r| !r.has_sub_reasons())
            .collect();
        assert_eq!(without, vec![MainReason::WebsitesNotLoading, MainReason::Other]);
        for reason in without {
            assert!(reason.sub_reasons().is_empty());
        }
    }

    #[test]
    fn test_sub_reasons_belong_to_their_main_reason() {
        for reason in MainReason::ALL {
            for sub in reason.sub_reasons() {
                assert_eq!(sub.main_reason(), reason);
            }
        }
    }

    #[test]
    fn test_sub_reason_parse_is_scoped_to_main_reason() {
        let sub = SubReason::parse(MainReason::AppIsSlowOrBuggy, "crashes").unwrap();
        assert_eq!(
            sub,
            SubReason::AppIsSlowOrBuggy(PerformanceSubReason::AppCrashesOrFreezes)
        );
        // "crashes" only exists under performance
        assert!(SubReason::parse(MainReason::SearchNotGoodEnough, "crashes").is_err());
        // "bookmarks" resolves differently depending on the main reason
        assert_eq!(
            SubReason::parse(MainReason::NotEnoughCustomizations, "bookmarks").unwrap(),
            SubReason::NotEnoughCustomizations(CustomizationSubReason::BookmarkDisplay)
        );
    }

    #[test]
    fn test_serializes_as_wire_names() {
        let json = serde_json::to_string(&MainReason::WebsitesNotLoading).unwrap();
        assert_eq!(json, "\"site_breakage\"");
        let sub = SubReason::SearchNotGoodEnough(SearchNotGoodEnoughSubReason::FasterLoadTimes);
        assert_eq!(serde_json::to_string(&sub).unwrap(), "\"load_time\"");
    }
}
