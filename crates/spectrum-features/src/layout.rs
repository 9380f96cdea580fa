use serde::Serialize;
use spectrum_instruments::scoring::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    OneHot,
    Numeric,
}

/// One contiguous block of the feature vector.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub name: String,
    pub kind: SegmentKind,
    pub offset: usize,
    pub width: usize,
    /// Slot names, in slot order.
    pub slots: Vec<String>,
}

pub const AGE_COLUMN: &str = "age_months";
pub const RISK_COLUMN: &str = "risk_score";

/// Position of every feature in the vector.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureLayout {
    pub segments: Vec<Segment>,
    pub width: usize,
}

impl FeatureLayout {
    /// Categorical questions first, in the given order, then age and risk
    /// score.
    pub fn for_questions(questions: &[Question]) -> Self {
        let mut segments = Vec::with_capacity(questions.len() + 2);
        let mut offset = 0;

        for question in questions {
            let slots: Vec<String> = question
                .encoding_order()
                .iter()
                .map(|o| o.value.clone())
                .collect();
            let width = slots.len();
            segments.push(Segment {
                name: question.id.clone(),
                kind: SegmentKind::OneHot,
                offset,
                width,
                slots,
            });
            offset += width;
        }

        for name in [AGE_COLUMN, RISK_COLUMN] {
            segments.push(Segment {
                name: name.to_string(),
                kind: SegmentKind::Numeric,
                offset,
                width: 1,
                slots: vec![name.to_string()],
            });
            offset += 1;
        }

        Self {
            segments,
            width: offset,
        }
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name == name)
    }

    /// Flat feature names, `question=token` for one-hot slots.
    pub fn feature_names(&self) -> Vec<String> {
        self.segments
            .iter()
            .flat_map(|s| match s.kind {
                SegmentKind::OneHot => s
                    .slots
                    .iter()
                    .map(|slot| format!("{}={}", s.name, slot))
                    .collect::<Vec<_>>(),
                SegmentKind::Numeric => vec![s.name.clone()],
            })
            .collect()
    }
}
