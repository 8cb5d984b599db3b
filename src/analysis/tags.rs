use crate::input::{Constraint, PromptData};

/// Constraint tags in the order they are emitted. `WordCount` has no tag.
const CONSTRAINT_TAGS: [(Constraint, &str); 4] = [
    (Constraint::StepByStep, "structured"),
    (Constraint::IncludeExamples, "example-rich"),
    (Constraint::NoJargon, "accessible"),
    (Constraint::IncludeStats, "data-driven"),
];

pub fn generate_tags(data: &PromptData) -> Vec<String> {
    let mut tags = vec![
        format!("{}-ready", data.output_type),
        data.tone.to_string(),
        format!("{}-detail", data.detail),
    ];

    tags.extend(
        CONSTRAINT_TAGS
            .iter()
            .filter(|(constraint, _)| data.has(*constraint))
            .map(|(_, tag)| tag.to_string()),
    );

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DetailLevel, OutputType, Tone};

    #[test]
    fn test_base_tags() {
        let data = PromptData::new("x")
            .with_output_type(OutputType::Design)
            .with_tone(Tone::Witty)
            .with_detail(DetailLevel::Short);
        assert_eq!(generate_tags(&data), vec!["design-ready", "witty", "short-detail"]);
    }

    #[test]
    fn test_constraint_tags_in_fixed_order() {
        let mut data = PromptData::new("x");
        for constraint in [
            Constraint::IncludeStats,
            Constraint::WordCount,
            Constraint::NoJargon,
            Constraint::IncludeExamples,
            Constraint::StepByStep,
        ] {
            data.toggle_constraint(constraint);
        }
        assert_eq!(
            generate_tags(&data),
            vec![
                "general-ready",
                "professional",
                "medium-detail",
                "structured",
                "example-rich",
                "accessible",
                "data-driven",
            ]
        );
    }

    #[test]
    fn test_word_count_adds_no_tag() {
        let data = PromptData::new("x").with_constraint(Constraint::WordCount);
        assert_eq!(generate_tags(&data).len(), 3);
    }
}
