use crate::{
    input::{Constraint, PromptData, Tone},
    models::{Audience, DebugInfo, Intent, Section},
    utils::TextStats,
};

/// Keyword groups checked in order; the first group with a hit wins.
const INTENT_KEYWORDS: [(Intent, &[&str]); 4] = [
    (Intent::Creation, &["create", "make", "build"]),
    (Intent::Explanation, &["explain", "describe", "what"]),
    (Intent::Improvement, &["improve", "optimize", "enhance"]),
    (Intent::Analysis, &["analyze", "compare", "evaluate"]),
];

pub fn detect_intent(input: &str) -> Intent {
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| input.contains_any_lowercase(keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}

pub fn classify_audience(data: &PromptData) -> Audience {
    match data.tone {
        Tone::Technical => Audience::Expert,
        Tone::Formal => Audience::Professional,
        Tone::Casual | Tone::Friendly => Audience::General,
        _ if data.has(Constraint::NoJargon) => Audience::Beginner,
        _ => Audience::General,
    }
}

pub fn analyze_structure(data: &PromptData) -> Vec<Section> {
    let mut structure = vec![Section::Introduction, Section::MainContent, Section::Conclusion];

    if data.has(Constraint::StepByStep) {
        structure[1] = Section::StepByStepProcess;
    }

    if data.has(Constraint::IncludeExamples) {
        let last = structure.len() - 1;
        structure.insert(last, Section::Examples);
    }

    structure
}

pub fn list_enhancements(data: &PromptData) -> Vec<String> {
    let mut enhancements = vec![
        "Added context and objective clarification".to_string(),
        "Structured with clear sections and instructions".to_string(),
        "Incorporated tone and detail level preferences".to_string(),
    ];

    if !data.constraints.is_empty() {
        enhancements.push(format!(
            "Applied {} additional constraint(s)",
            data.constraints.len()
        ));
    }

    enhancements
}

pub fn build_debug_info(data: &PromptData) -> DebugInfo {
    DebugInfo {
        intent: detect_intent(&data.input),
        audience: classify_audience(data),
        structure: analyze_structure(data),
        enhancements: list_enhancements(data),
    }
}
