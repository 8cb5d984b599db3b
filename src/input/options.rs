use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::enhance_error::EnhanceError;

/// What kind of content the enhanced prompt should ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputType {
    #[default]
    General,
    Blog,
    Code,
    Image,
    Design,
    Summary,
    Creative,
}

impl OutputType {
    pub const ALL: [OutputType; 7] = [
        OutputType::General,
        OutputType::Blog,
        OutputType::Code,
        OutputType::Image,
        OutputType::Design,
        OutputType::Summary,
        OutputType::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::General => "general",
            OutputType::Blog => "blog",
            OutputType::Code => "code",
            OutputType::Image => "image",
            OutputType::Design => "design",
            OutputType::Summary => "summary",
            OutputType::Creative => "creative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputType::General => "General",
            OutputType::Blog => "Blog Post",
            OutputType::Code => "Code",
            OutputType::Image => "Image Generation",
            OutputType::Design => "Design Brief",
            OutputType::Summary => "Summary",
            OutputType::Creative => "Creative Writing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Friendly,
    Formal,
    Witty,
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Formal,
        Tone::Witty,
        Tone::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Witty => "witty",
            Tone::Technical => "technical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Formal => "Formal",
            Tone::Witty => "Witty",
            Tone::Technical => "Technical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailLevel {
    Short,
    #[default]
    Medium,
    Comprehensive,
}

impl DetailLevel {
    pub const ALL: [DetailLevel; 3] = [
        DetailLevel::Short,
        DetailLevel::Medium,
        DetailLevel::Comprehensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Short => "short",
            DetailLevel::Medium => "medium",
            DetailLevel::Comprehensive => "comprehensive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailLevel::Short => "Short",
            DetailLevel::Medium => "Medium",
            DetailLevel::Comprehensive => "Comprehensive",
        }
    }
}

/// Optional switches that add sections, bullets or tags to the enhanced prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Constraint {
    WordCount,
    NoJargon,
    IncludeExamples,
    StepByStep,
    IncludeStats,
}

impl Constraint {
    pub const ALL: [Constraint; 5] = [
        Constraint::WordCount,
        Constraint::NoJargon,
        Constraint::IncludeExamples,
        Constraint::StepByStep,
        Constraint::IncludeStats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::WordCount => "word-count",
            Constraint::NoJargon => "no-jargon",
            Constraint::IncludeExamples => "include-examples",
            Constraint::StepByStep => "step-by-step",
            Constraint::IncludeStats => "include-stats",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Constraint::WordCount => "Include Word Count",
            Constraint::NoJargon => "Avoid Jargon",
            Constraint::IncludeExamples => "Include Examples",
            Constraint::StepByStep => "Step-by-step Format",
            Constraint::IncludeStats => "Include Statistics",
        }
    }
}

macro_rules! impl_option_str {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = EnhanceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                <$ty>::ALL
                    .into_iter()
                    .find(|opt| opt.as_str() == wanted)
                    .ok_or_else(|| EnhanceError::invalid_option($kind, s))
            }
        }
    };
}

impl_option_str!(OutputType, "output type");
impl_option_str!(Tone, "tone");
impl_option_str!(DetailLevel, "detail level");
impl_option_str!(Constraint, "constraint");
