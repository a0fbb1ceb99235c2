//! Scenarios: ordered playlists of typed steps.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{MediaKind, ScenarioId};

/// An ordered playlist of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario identifier.
    pub id: ScenarioId,
    /// Display title.
    pub title: String,
    /// Ordered steps.
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Create a scenario.
    pub fn new(id: impl Into<ScenarioId>, title: impl Into<String>, steps: Vec<ScenarioStep>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            steps,
        }
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// One entry of a scenario.
///
/// On the wire a step is an object with exactly one populated key, e.g.
/// `{"text": "songs/amazing-grace__42"}` or `{"blank": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStep", into = "RawStep")]
pub enum ScenarioStep {
    /// Text document reference (may carry a slug prefix).
    Text(String),
    /// Media path.
    Media {
        /// Kind of media.
        kind: MediaKind,
        /// Relative media path.
        path: String,
    },
    /// Section divider.
    Heading(String),
    /// Empty slide.
    Blank,
}

impl ScenarioStep {
    /// Text step.
    pub fn text(reference: impl Into<String>) -> Self {
        Self::Text(reference.into())
    }

    /// Media step.
    pub fn media(kind: MediaKind, path: impl Into<String>) -> Self {
        Self::Media { kind, path: path.into() }
    }

    /// Heading step.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RawStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blank: Option<bool>,
}

impl TryFrom<RawStep> for ScenarioStep {
    type Error = Error;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let mut steps = Vec::with_capacity(1);
        if let Some(text) = raw.text {
            steps.push(Self::Text(text));
        }
        if let Some(path) = raw.image {
            steps.push(Self::media(MediaKind::Image, path));
        }
        if let Some(path) = raw.video {
            steps.push(Self::media(MediaKind::Video, path));
        }
        if let Some(path) = raw.audio {
            steps.push(Self::media(MediaKind::Audio, path));
        }
        if let Some(heading) = raw.heading {
            steps.push(Self::Heading(heading));
        }
        match raw.blank {
            Some(true) => steps.push(Self::Blank),
            Some(false) => return Err(Error::InvalidStep("`blank` must be true".to_string())),
            None => {}
        }

        let count = steps.len();
        match (steps.pop(), count) {
            (Some(step), 1) => Ok(step),
            (None, _) => Err(Error::InvalidStep("step has no populated field".to_string())),
            _ => Err(Error::InvalidStep(format!("step has {count} populated fields, expected 1"))),
        }
    }
}

impl From<ScenarioStep> for RawStep {
    fn from(step: ScenarioStep) -> Self {
        match step {
            ScenarioStep::Text(text) => Self { text: Some(text), ..Self::default() },
            ScenarioStep::Media { kind: MediaKind::Image, path } => Self { image: Some(path), ..Self::default() },
            ScenarioStep::Media { kind: MediaKind::Video, path } => Self { video: Some(path), ..Self::default() },
            ScenarioStep::Media { kind: MediaKind::Audio, path } => Self { audio: Some(path), ..Self::default() },
            ScenarioStep::Heading(heading) => Self { heading: Some(heading), ..Self::default() },
            ScenarioStep::Blank => Self { blank: Some(true), ..Self::default() },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn parses_each_step_kind() {
        let json = r#"[
            {"text": "songs/amazing-grace__42"},
            {"image": "media/welcome.png"},
            {"video": "media/intro.mp4"},
            {"audio": "media/prelude.mp3"},
            {"heading": "Offering"},
            {"blank": true}
        ]"#;
        let steps: Vec<ScenarioStep> = serde_json::from_str(json).unwrap();
        assert_eq!(
            steps,
            vec![
                ScenarioStep::text("songs/amazing-grace__42"),
                ScenarioStep::media(MediaKind::Image, "media/welcome.png"),
                ScenarioStep::media(MediaKind::Video, "media/intro.mp4"),
                ScenarioStep::media(MediaKind::Audio, "media/prelude.mp3"),
                ScenarioStep::heading("Offering"),
                ScenarioStep::Blank,
            ]
        );
    }

    #[test]
    fn rejects_empty_step() {
        let err = serde_json::from_str::<ScenarioStep>("{}").unwrap_err();
        assert!(err.to_string().contains("no populated field"));
    }

    #[test]
    fn rejects_step_with_two_fields() {
        let err = serde_json::from_str::<ScenarioStep>(r#"{"text": "a", "image": "b"}"#).unwrap_err();
        assert!(err.to_string().contains("2 populated fields"));
    }

    #[test]
    fn rejects_false_blank() {
        assert!(serde_json::from_str::<ScenarioStep>(r#"{"blank": false}"#).is_err());
    }

    #[test]
    fn serializes_single_key() {
        let json = serde_json::to_string(&ScenarioStep::heading("Sermon")).unwrap();
        assert_eq!(json, r#"{"heading":"Sermon"}"#);
    }

    #[test]
    fn scenario_document_parses() {
        let json = r#"{"id": "sunday", "title": "Sunday Service", "steps": [{"blank": true}]}"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.id.as_str(), "sunday");
        assert_eq!(scenario.step_count(), 1);
    }
}
