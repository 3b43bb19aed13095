//! The bundle of assets produced for one course.

use flaily_data::{ObstacleSet, Position};
use serde::{Deserialize, Serialize};

use crate::instructions::build_instruction_string_with;
use crate::sign::{SignTokens, build_sign_string_with};
use crate::template::InstructionTemplate;

/// Where a course's obstacles came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleSource {
    Preset,
    List,
    Generated,
}

/// Which asset to print when only one is wanted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Sign,
    Instructions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDocument {
    pub source: ObstacleSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Positions in emission order.
    pub obstacles: Vec<Position>,
    pub sign: String,
    pub instructions: String,
}

impl CourseDocument {
    /// Derive both assets from `obstacles`.
    ///
    /// The sign is built from the set of positions; instructions follow
    /// `obstacles` as given.
    pub fn build(
        source: ObstacleSource,
        obstacles: Vec<Position>,
        tokens: &SignTokens,
        template: &InstructionTemplate,
    ) -> Self {
        let set: ObstacleSet = obstacles.iter().copied().collect();
        let sign = build_sign_string_with(&set, tokens);
        let instructions = build_instruction_string_with(obstacles.iter().copied(), template);
        Self {
            source,
            seed: None,
            obstacles,
            sign,
            instructions,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Plain-text rendering: the sign, a newline, then the instructions.
    pub fn to_text(&self, only: Option<Section>) -> String {
        match only {
            Some(Section::Sign) => self.sign.clone(),
            Some(Section::Instructions) => self.instructions.clone(),
            None => format!("{}\n{}", self.sign, self.instructions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(positions: Vec<Position>) -> CourseDocument {
        CourseDocument::build(
            ObstacleSource::List,
            positions,
            &SignTokens::default(),
            &InstructionTemplate::default(),
        )
    }

    #[test]
    fn list_order_drives_instructions() {
        let d = doc(vec![21, 15]);
        assert_eq!(d.instructions, "door level1 2 7 21 8\ndoor level1 2 7 15 8");
        assert_eq!(d.sign.split(' ').filter(|t| *t == "ws").count(), 2);
    }

    #[test]
    fn text_sections() {
        let d = doc(vec![0]);
        assert!(d.to_text(Some(Section::Sign)).starts_with("ws air"));
        assert_eq!(d.to_text(Some(Section::Instructions)), "door level1 2 7 0 8");
        let both = d.to_text(None);
        assert_eq!(both.lines().count(), 2);
        assert!(both.ends_with("\ndoor level1 2 7 0 8"));
    }

    #[test]
    fn json_round_trip() {
        let d = doc(vec![15, 21]).with_seed(9);
        let json = serde_json::to_string(&d).expect("serialize");
        assert!(json.contains("\"source\":\"list\""));
        assert!(json.contains("\"seed\":9"));
        let back: CourseDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, d);
    }

    #[test]
    fn seed_is_omitted_when_absent() {
        let json = serde_json::to_string(&doc(vec![])).expect("serialize");
        assert!(!json.contains("seed"));
    }
}
