//! Door placement commands for the level editor.

use flaily_data::Position;

use crate::template::InstructionTemplate;

/// One `door level1 2 7 {pos} 8` line per position, in input order.
///
/// Nothing is sorted, deduplicated, or range-checked here; the caller's
/// order is the emission order.
///
/// ```
/// use flaily_content::build_instruction_string;
///
/// assert_eq!(
///     build_instruction_string([15, 21]),
///     "door level1 2 7 15 8\ndoor level1 2 7 21 8"
/// );
/// assert_eq!(build_instruction_string([]), "");
/// ```
pub fn build_instruction_string<I>(obstacles: I) -> String
where
    I: IntoIterator<Item = Position>,
{
    build_instruction_string_with(obstacles, &InstructionTemplate::default())
}

pub fn build_instruction_string_with<I>(obstacles: I, template: &InstructionTemplate) -> String
where
    I: IntoIterator<Item = Position>,
{
    obstacles
        .into_iter()
        .map(|position| template.render(position))
        .collect::<Vec<_>>()
        .join("\n")
}
