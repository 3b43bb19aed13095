#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Course content generation for FlailySnail.
//!
//! Turns a set of obstacle positions into the two text assets the level
//! editor consumes: the sign string and the door placement commands.

pub mod document;
pub mod generator;
pub mod instructions;
pub mod sign;
pub mod template;

pub use document::{CourseDocument, ObstacleSource, Section};
pub use generator::{GenerateError, GeneratedCourse, GeneratorConfig, OverflowPolicy, generate, generate_with};
pub use instructions::{build_instruction_string, build_instruction_string_with};
pub use sign::{SignTokens, TokenError, build_sign_string, build_sign_string_with};
pub use template::{InstructionTemplate, TemplateError};

pub use flaily_data::{ObstacleSet, PRESET_COURSE, Position, TRACK_LENGTH};
