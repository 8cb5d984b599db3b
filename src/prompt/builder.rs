use crate::{
    input::{Constraint, PromptData},
    prompt::templates,
};

const BASE_INSTRUCTIONS: [&str; 4] = [
    "1. Begin with a clear introduction that establishes context and relevance",
    "2. Organize content with logical flow and clear transitions",
    "3. Support key points with evidence, examples, or explanations",
    "4. Conclude with actionable insights or clear takeaways",
];

const SEQUENTIAL_INSTRUCTION: &str = "5. Present information in a clear, sequential format";

/// Assembles the enhanced prompt text. Section order is fixed; the order in
/// which constraints were selected has no effect.
pub fn build_enhanced_prompt(data: &PromptData) -> String {
    let output_type = data.output_type;

    let mut prompt = format!(
        r#"Act as a world-class expert in {} with extensive experience in creating high-quality {} content. Given the following context, criteria, and instructions, {} that meets professional standards and user expectations.

## Context
{}

## Objective
{}

## Approach
{}

## Instructions
{}"#,
        templates::expertise_area(output_type),
        output_type,
        templates::action_verb(output_type),
        build_context(&data.input),
        templates::objective(output_type, &data.input),
        build_approach(data),
        build_instructions(data),
    );

    if data.has(Constraint::StepByStep) {
        prompt.push_str("\n\n## Step-by-Step Process\n");
        prompt.push_str(templates::step_by_step(output_type));
    }

    if data.has(Constraint::IncludeExamples) {
        prompt.push_str(&format!(
            "\n\n## Examples\nInclude 2-3 relevant examples that illustrate key concepts and provide practical context for the {}.",
            output_type
        ));
    }

    if data.has(Constraint::WordCount) {
        prompt.push_str(&format!(
            "\n\n## Requirements\n- Target length: {} words\n- Maintain quality over quantity",
            templates::word_count_range(data.detail)
        ));
    }

    // Appended to whichever section came last, the Requirements list when present.
    if data.has(Constraint::IncludeStats) {
        prompt.push_str("\n- Include relevant statistics and data points where applicable");
    }

    if data.has(Constraint::NoJargon) {
        prompt.push_str("\n- Use clear, accessible language avoiding technical jargon");
    }

    prompt.push_str(&format!(
        "\n\n## Output Format\nStructure your response with clear headings, bullet points where appropriate, and ensure {} throughout.\n\nBegin your response now:",
        templates::tone_description(data.tone)
    ));

    prompt
}

fn build_context(input: &str) -> String {
    format!(
        "The user wants to {}. This requires understanding the specific needs, target audience, and desired outcomes to create an effective solution.",
        input.to_lowercase()
    )
}

fn build_approach(data: &PromptData) -> String {
    format!(
        "{} {}",
        templates::tone_approach(data.tone),
        templates::detail_approach(data.detail)
    )
}

fn build_instructions(data: &PromptData) -> String {
    let mut instructions = BASE_INSTRUCTIONS.to_vec();
    if data.has(Constraint::StepByStep) {
        instructions.push(SEQUENTIAL_INSTRUCTION);
    }
    instructions.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DetailLevel, OutputType, Tone};

    fn section_index(text: &str, heading: &str) -> usize {
        text.find(heading)
            .unwrap_or_else(|| panic!("missing section {heading}"))
    }

    #[test]
    fn test_default_prompt_layout() {
        let prompt = build_enhanced_prompt(&PromptData::new("Plan a Team Offsite"));

        assert!(prompt.starts_with(
            "Act as a world-class expert in the relevant field with extensive experience in creating high-quality general content."
        ));
        assert!(prompt.contains("provide a comprehensive response that meets professional standards"));
        assert!(prompt.contains("\n\n## Context\nThe user wants to plan a team offsite. This requires"));
        assert!(prompt.contains("\n\n## Objective\nProvide a comprehensive response to: Plan a Team Offsite"));
        assert!(prompt.contains(
            "## Approach\nMaintain a professional, authoritative tone while ensuring clarity and precision. Provide balanced coverage with adequate detail and examples."
        ));
        assert!(prompt.contains("4. Conclude with actionable insights or clear takeaways\n\n## Output Format"));
        assert!(!prompt.contains("5. Present information"));
        assert!(!prompt.contains("## Step-by-Step Process"));
        assert!(!prompt.contains("## Examples"));
        assert!(!prompt.contains("## Requirements"));
        assert!(prompt.ends_with(
            "and ensure maintaining professional credibility throughout.\n\nBegin your response now:"
        ));
    }

    #[test]
    fn test_every_output_type_names_itself() {
        for output_type in OutputType::ALL {
            let data = PromptData::new("idea").with_output_type(output_type);
            let prompt = build_enhanced_prompt(&data);
            assert!(prompt.contains(&format!("creating high-quality {} content", output_type)));
            assert!(prompt.contains(templates::expertise_area(output_type)));
            assert!(prompt.contains(templates::action_verb(output_type)));
        }
    }

    #[test]
    fn test_every_tone_and_detail_appear() {
        for tone in Tone::ALL {
            for detail in DetailLevel::ALL {
                let data = PromptData::new("idea").with_tone(tone).with_detail(detail);
                let prompt = build_enhanced_prompt(&data);
                assert!(prompt.contains(templates::tone_approach(tone)));
                assert!(prompt.contains(templates::detail_approach(detail)));
                assert!(prompt.contains(&format!(
                    "ensure {} throughout.",
                    templates::tone_description(tone)
                )));
            }
        }
    }

    #[test]
    fn test_step_by_step_adds_instruction_and_section() {
        let data = PromptData::new("build an api")
            .with_output_type(OutputType::Code)
            .with_constraint(Constraint::StepByStep);
        let prompt = build_enhanced_prompt(&data);

        assert!(prompt.contains(
            "4. Conclude with actionable insights or clear takeaways\n5. Present information in a clear, sequential format"
        ));
        assert!(prompt.contains("## Step-by-Step Process\n1. Analyze requirements and constraints"));
        assert!(prompt.contains("5. Document and test the solution"));
    }

    #[test]
    fn test_examples_section_names_output_type() {
        let data = PromptData::new("a poster")
            .with_output_type(OutputType::Image)
            .with_constraint(Constraint::IncludeExamples);
        let prompt = build_enhanced_prompt(&data);
        assert!(prompt.contains(
            "## Examples\nInclude 2-3 relevant examples that illustrate key concepts and provide practical context for the image."
        ));
    }

    #[test]
    fn test_requirements_follow_detail_level() {
        let data = PromptData::new("x")
            .with_detail(DetailLevel::Comprehensive)
            .with_constraint(Constraint::WordCount)
            .with_constraint(Constraint::IncludeStats)
            .with_constraint(Constraint::NoJargon);
        let prompt = build_enhanced_prompt(&data);
        assert!(prompt.contains(
            "## Requirements\n- Target length: 1500-2500 words\n- Maintain quality over quantity\n- Include relevant statistics and data points where applicable\n- Use clear, accessible language avoiding technical jargon\n\n## Output Format"
        ));
    }

    #[test]
    fn test_bullets_without_requirements_trail_previous_section() {
        let data = PromptData::new("x").with_constraint(Constraint::NoJargon);
        let prompt = build_enhanced_prompt(&data);
        assert!(!prompt.contains("## Requirements"));
        assert!(prompt.contains(
            "4. Conclude with actionable insights or clear takeaways\n- Use clear, accessible language avoiding technical jargon"
        ));
    }

    #[test]
    fn test_section_order_ignores_selection_order() {
        let forward = PromptData::new("x")
            .with_output_type(OutputType::Blog)
            .with_constraint(Constraint::StepByStep)
            .with_constraint(Constraint::IncludeExamples)
            .with_constraint(Constraint::WordCount);
        let reversed = PromptData::new("x")
            .with_output_type(OutputType::Blog)
            .with_constraint(Constraint::WordCount)
            .with_constraint(Constraint::IncludeExamples)
            .with_constraint(Constraint::StepByStep);

        let prompt = build_enhanced_prompt(&forward);
        assert_eq!(prompt, build_enhanced_prompt(&reversed));

        let steps = section_index(&prompt, "## Step-by-Step Process");
        let examples = section_index(&prompt, "## Examples");
        let requirements = section_index(&prompt, "## Requirements");
        let format = section_index(&prompt, "## Output Format");
        assert!(steps < examples && examples < requirements && requirements < format);
    }
}
