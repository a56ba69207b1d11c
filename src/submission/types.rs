use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::reason::{MainReason, SubReason};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Positive,
    Negative,
    BrokenSite,
    Rated,
}

/// Static details about the app sending the feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub platform: String,
    pub version: String,
}

/// The JSON body posted to the feedback service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FeedbackPayload {
    pub kind: FeedbackKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<MainReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subreason: Option<SubReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub platform: String,
    pub version: String,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackPayload {
    fn base(kind: FeedbackKind, app: &AppInfo) -> Self {
        Self {
            kind,
            reason: None,
            subreason: None,
            comment: None,
            url: None,
            platform: app.platform.clone(),
            version: app.version.clone(),
            submitted_at: Utc::now(),
        }
    }

    pub fn negative(
        app: &AppInfo,
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    ) -> Self {
        Self {
            reason: Some(main_reason),
            subreason: sub_reason,
            comment: Some(text),
            ..Self::base(FeedbackKind::Negative, app)
        }
    }

    pub fn broken_site(app: &AppInfo, text: String, url: Option<String>) -> Self {
        Self {
            reason: Some(MainReason::WebsitesNotLoading),
            comment: Some(text),
            url,
            ..Self::base(FeedbackKind::BrokenSite, app)
        }
    }

    pub fn positive(app: &AppInfo, text: Option<String>) -> Self {
        Self {
            comment: text,
            ..Self::base(FeedbackKind::Positive, app)
        }
    }

    pub fn rated(app: &AppInfo) -> Self {
        Self::base(FeedbackKind::Rated, app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reason::SearchNotGoodEnoughSubReason;

    fn app() -> AppInfo {
        AppInfo {
            platform: "android".to_string(),
            version: "5.2.0".to_string(),
        }
    }

    #[test]
    fn test_negative_payload_json() {
        let payload = FeedbackPayload::negative(
            &app(),
            MainReason::SearchNotGoodEnough,
            Some(SubReason::SearchNotGoodEnough(
                SearchNotGoodEnoughSubReason::BetterAutocomplete,
            )),
            "suggestions are off".to_string(),
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "negative");
        assert_eq!(json["reason"], "search_not_good");
        assert_eq!(json["subreason"], "autocomplete");
        assert_eq!(json["comment"], "suggestions are off");
        assert_eq!(json["platform"], "android");
        assert!(json.get("url").is_none());
        assert!(json["submitted_at"].is_string());
    }

    #[test]
    fn test_broken_site_payload_tags_site_breakage() {
        let payload = FeedbackPayload::broken_site(&app(), "spinner".to_string(), None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "broken_site");
        assert_eq!(json["reason"], "site_breakage");
        assert!(json.get("url").is_none());
    }

    #[test]
    fn test_positive_without_details_omits_comment() {
        let json = serde_json::to_value(FeedbackPayload::positive(&app(), None)).unwrap();
        assert_eq!(json["kind"], "positive");
        assert!(json.get("comment").is_none());
        assert!(json.get("reason").is_none());
    }
}
