use crate::input::{DetailLevel, PromptData, Tone};

const BASE_SCORE: u32 = 70;
const MAX_SCORE: u32 = 98;

/// Heuristic quality score. Always within 70..=98.
pub fn calculate_quality_score(data: &PromptData) -> u8 {
    let mut score = BASE_SCORE;
    let input_len = data.input_len();

    if input_len > 50 {
        score += 10;
    }
    if input_len > 100 {
        score += 5;
    }

    if data.tone != Tone::Professional {
        score += 5;
    }
    if data.detail == DetailLevel::Comprehensive {
        score += 10;
    }
    score += data.constraints.len() as u32 * 2;

    score.min(MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Constraint;

    #[test]
    fn test_base_score() {
        assert_eq!(calculate_quality_score(&PromptData::new("short idea")), 70);
    }

    #[test]
    fn test_input_length_thresholds() {
        assert_eq!(calculate_quality_score(&PromptData::new("a".repeat(50))), 70);
        assert_eq!(calculate_quality_score(&PromptData::new("a".repeat(51))), 80);
        assert_eq!(calculate_quality_score(&PromptData::new("a".repeat(100))), 80);
        assert_eq!(calculate_quality_score(&PromptData::new("a".repeat(101))), 85);
    }

    #[test]
    fn test_customization_points() {
        let data = PromptData::new("x")
            .with_tone(Tone::Casual)
            .with_detail(DetailLevel::Comprehensive)
            .with_constraint(Constraint::NoJargon)
            .with_constraint(Constraint::WordCount);
        assert_eq!(calculate_quality_score(&data), 70 + 5 + 10 + 4);
    }

    #[test]
    fn test_score_is_capped() {
        let mut data = PromptData::new("a".repeat(200))
            .with_tone(Tone::Witty)
            .with_detail(DetailLevel::Comprehensive);
        for constraint in Constraint::ALL {
            data.toggle_constraint(constraint);
        }
        assert_eq!(calculate_quality_score(&data), 98);
    }
}
