//! Fixed text tables the enhanced prompt is assembled from.

use crate::input::options::{DetailLevel, OutputType, Tone};

const DEFAULT_STEP_BY_STEP: &str =
    "Follow a logical progression from problem identification to solution implementation.";

pub fn expertise_area(output_type: OutputType) -> &'static str {
    match output_type {
        OutputType::Blog => "content marketing and professional writing",
        OutputType::Code => "software development and programming",
        OutputType::Image => "visual design and AI image generation",
        OutputType::Design => "user experience and visual design",
        OutputType::Summary => "information synthesis and communication",
        OutputType::Creative => "creative writing and storytelling",
        OutputType::General => "the relevant field",
    }
}

pub fn action_verb(output_type: OutputType) -> &'static str {
    match output_type {
        OutputType::Blog => "write a comprehensive blog post",
        OutputType::Code => "develop a complete solution",
        OutputType::Image => "create a detailed image generation prompt",
        OutputType::Design => "design a comprehensive solution",
        OutputType::Summary => "provide a thorough summary",
        OutputType::Creative => "create engaging content",
        OutputType::General => "provide a comprehensive response",
    }
}

pub fn objective(output_type: OutputType, input: &str) -> String {
    let lead = match output_type {
        OutputType::Blog => "Create an engaging and informative blog post about",
        OutputType::Code => "Develop clean, efficient, and well-documented code for",
        OutputType::Image => "Generate a detailed image prompt for",
        OutputType::Design => "Create a comprehensive design brief for",
        OutputType::Summary => "Provide a concise and comprehensive summary of",
        OutputType::Creative => "Craft creative and engaging content about",
        OutputType::General => "Provide a comprehensive response to",
    };
    format!("{}: {}", lead, input)
}

pub fn tone_approach(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => {
            "Maintain a professional, authoritative tone while ensuring clarity and precision."
        }
        Tone::Casual => "Use a conversational, approachable tone that feels natural and engaging.",
        Tone::Friendly => "Adopt a warm, welcoming tone that builds connection with the audience.",
        Tone::Formal => {
            "Employ formal language and structure appropriate for official or academic contexts."
        }
        Tone::Witty => "Incorporate humor and clever insights while maintaining substance and value.",
        Tone::Technical => "Use precise technical language appropriate for expert audiences.",
    }
}

pub fn detail_approach(detail: DetailLevel) -> &'static str {
    match detail {
        DetailLevel::Short => "Focus on the most essential points with concise explanations.",
        DetailLevel::Medium => "Provide balanced coverage with adequate detail and examples.",
        DetailLevel::Comprehensive => {
            "Include thorough analysis, multiple perspectives, and extensive detail."
        }
    }
}

pub fn tone_description(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "maintaining professional credibility",
        Tone::Casual => "keeping the tone conversational and accessible",
        Tone::Friendly => "creating a welcoming and supportive atmosphere",
        Tone::Formal => "adhering to formal writing conventions",
        Tone::Witty => "incorporating appropriate humor and cleverness",
        Tone::Technical => "using precise technical terminology",
    }
}

pub fn word_count_range(detail: DetailLevel) -> &'static str {
    match detail {
        DetailLevel::Short => "300-500",
        DetailLevel::Medium => "800-1200",
        DetailLevel::Comprehensive => "1500-2500",
    }
}

pub fn step_by_step(output_type: OutputType) -> &'static str {
    match output_type {
        OutputType::Blog => {
            "1. Hook the reader with an engaging opening\n\
             2. Present the main topic with supporting evidence\n\
             3. Provide actionable insights or solutions\n\
             4. End with a compelling call-to-action"
        }
        OutputType::Code => {
            "1. Analyze requirements and constraints\n\
             2. Design the solution architecture\n\
             3. Implement core functionality\n\
             4. Add error handling and optimization\n\
             5. Document and test the solution"
        }
        OutputType::Design => {
            "1. Research and understand user needs\n\
             2. Define design objectives and constraints\n\
             3. Create wireframes and mockups\n\
             4. Iterate based on feedback\n\
             5. Prepare final deliverables"
        }
        _ => DEFAULT_STEP_BY_STEP,
    }
}

pub fn preview(output_type: OutputType) -> &'static str {
    match output_type {
        OutputType::Blog => {
            "A well-structured blog post with engaging headlines, informative content, and a clear call-to-action that would attract and retain readers while achieving the desired business objectives."
        }
        OutputType::Code => {
            "Clean, efficient code with proper documentation, error handling, and following best practices that would be production-ready and maintainable."
        }
        OutputType::Image => {
            "A detailed visual description that would generate high-quality, contextually appropriate images with proper composition, lighting, and style elements."
        }
        OutputType::Design => {
            "A comprehensive design solution with user-centered approach, clear visual hierarchy, and innovative elements that address user needs and business goals."
        }
        OutputType::Summary => {
            "A concise yet comprehensive overview that captures all key points while remaining accessible and actionable for the target audience."
        }
        OutputType::Creative => {
            "Engaging, original content that captures attention, evokes emotion, and delivers the intended message through compelling storytelling and creative expression."
        }
        OutputType::General => {
            "High-quality output that meets professional standards and user expectations."
        }
    }
}
