//! Prompt construction for the narrative generator.
//!
//! The archetype is computed locally and stated in the prompt; the model is
//! only asked to write about it, never to score.

use std::fmt::Write as _;

use compass_scoring::domain::archetypes::ArchetypeTable;
use compass_scoring::domain::classification::HIGH_THRESHOLD;
use compass_scoring::domain::questions::Dimension;
use compass_scoring::domain::report::{QuestionScore, ReportContext};

const INTRODUCTION: &str = "\
Act as the expert consultant for \"The Leader's Compass\" assessment.

The user has completed the assessment using a 1-5 scale (1=Strongly Disagree, \
2=Disagree, 3=Neutral, 4=Agree, 5=Strongly Agree). The questions are grouped \
into four dimensions: Purpose (P), Joy (J), Impact (I), and Well-being (W).";

const TASK: &str = "\
Your task is to write the \"Personalized Insights\" report with this structure:

1. **Archetype:** State the user's Archetype name prominently, exactly as given above.
2. **Narrative Profile:** Write a 'Narrative Profile' (approx. 150 words) that confirms \
the Archetype, validates the user's struggles and strengths across the four dimensions, \
and speaks empathetically to their current situation.
3. **The Path to Symmetry:** In a section with this title (approx. 100 words), describe \
the promise of full alignment (The Harmonious Leader - H H H H) and link the user's current \
gaps to the value of a better system or framework. Do NOT give specific steps; explain the \
benefit of learning the tools that bridge the gap.

Format the output as Markdown in a professional tone, using H3 headers for sections.";

/// Formats one answer line, e.g.
/// `- Q7 (Joy): 'My work makes room for ...' scored 3/5 (Neutral)`.
#[must_use]
pub fn format_answer_line(score: &QuestionScore) -> String {
    format!(
        "- Q{} ({}): '{}' scored {}/5 ({})",
        score.ordinal,
        score.dimension.label(),
        score.text,
        score.rating,
        score.rating_label
    )
}

/// Builds the full generation prompt for a scored assessment.
#[must_use]
pub fn build_prompt(context: &ReportContext, archetypes: &ArchetypeTable) -> String {
    let mut prompt = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(prompt, "{INTRODUCTION}\n");

    let _ = writeln!(prompt, "Here are the user's answers:\n");
    for score in &context.questions {
        let _ = writeln!(prompt, "{}", format_answer_line(score));
    }

    let _ = writeln!(
        prompt,
        "\nDimension averages (a dimension is High (H) when its average is at least \
         {HIGH_THRESHOLD}, otherwise Low (L)):\n"
    );
    for dimension in Dimension::ALL {
        let _ = writeln!(
            prompt,
            "- {} ({}): {:.2} -> {}",
            dimension.label(),
            dimension.letter(),
            context.dimension_averages.get(dimension),
            context.classification.level(dimension).symbol()
        );
    }

    let _ = writeln!(
        prompt,
        "\nClassification code (P J I W): {}\nArchetype: {}\n",
        context.classification_code, context.archetype_name
    );

    let _ = writeln!(prompt, "ARCHETYPES:\n{}", archetypes.describe());
    let _ = write!(prompt, "{TASK}");

    prompt
}
