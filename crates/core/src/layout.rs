//! Toolkit-independent description of which start-page layout to draw and how its placeholders
//! are shaped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Data is still loading; only the viewport class matters.
    Loading { mobile: bool },
    /// Single column: header, welcome, pomodoro, todo list.
    Mobile,
    /// Header, welcome + clock row, then todo list (2/3) beside pomodoro (1/3).
    Desktop,
}

pub fn select_layout(loaded: bool, mobile: bool) -> LayoutVariant {
    match (loaded, mobile) {
        (false, mobile) => LayoutVariant::Loading { mobile },
        (true, true) => LayoutVariant::Mobile,
        (true, false) => LayoutVariant::Desktop,
    }
}

/// Horizontal share of the three-column desktop grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSpan {
    Full,
    TwoThirds,
    OneThird,
}

impl ColumnSpan {
    /// Fill portion out of a three-column grid.
    pub fn portion(self) -> u16 {
        match self {
            ColumnSpan::Full => 3,
            ColumnSpan::TwoThirds => 2,
            ColumnSpan::OneThird => 1,
        }
    }
}

pub const TODO_SPAN: ColumnSpan = ColumnSpan::TwoThirds;
pub const POMODORO_SPAN: ColumnSpan = ColumnSpan::OneThird;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonBlock {
    /// Fraction of the section width, `0.0..=1.0`.
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonSection {
    pub span: ColumnSpan,
    pub blocks: Vec<SkeletonBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonPlan {
    /// `true` stacks every section vertically; `false` lays the partial spans side by side.
    pub stacked: bool,
    pub sections: Vec<SkeletonSection>,
}

const fn block(width: f32, height: f32) -> SkeletonBlock {
    SkeletonBlock { width, height }
}

/// Placeholder blocks shown under the header while data loads.
pub fn skeleton_plan(mobile: bool) -> SkeletonPlan {
    let welcome = SkeletonSection {
        span: ColumnSpan::Full,
        blocks: vec![block(0.75, 48.0), block(0.5, 32.0)],
    };

    if mobile {
        SkeletonPlan {
            stacked: true,
            sections: vec![
                welcome,
                SkeletonSection {
                    span: ColumnSpan::Full,
                    blocks: vec![block(1.0, 192.0)],
                },
                SkeletonSection {
                    span: ColumnSpan::Full,
                    blocks: vec![block(1.0, 256.0)],
                },
            ],
        }
    } else {
        SkeletonPlan {
            stacked: false,
            sections: vec![
                welcome,
                SkeletonSection {
                    span: TODO_SPAN,
                    blocks: vec![block(1.0, 256.0)],
                },
                SkeletonSection {
                    span: POMODORO_SPAN,
                    blocks: vec![block(1.0, 192.0)],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn unloaded_is_always_loading(#[case] mobile: bool) {
        assert_eq!(select_layout(false, mobile), LayoutVariant::Loading { mobile });
    }

    #[test]
    fn loaded_depends_only_on_viewport() {
        assert_eq!(select_layout(true, true), LayoutVariant::Mobile);
        assert_eq!(select_layout(true, false), LayoutVariant::Desktop);
    }

    #[test]
    fn mobile_skeleton_stacks_full_width_blocks() {
        let plan = skeleton_plan(true);
        assert!(plan.stacked);
        assert!(plan
            .sections
            .iter()
            .all(|section| section.span == ColumnSpan::Full));
        let heights: Vec<f32> = plan
            .sections
            .iter()
            .flat_map(|section| section.blocks.iter().map(|block| block.height))
            .collect();
        assert_eq!(heights, vec![48.0, 32.0, 192.0, 256.0]);
    }

    #[test]
    fn desktop_skeleton_mirrors_grid_split() {
        let plan = skeleton_plan(false);
        assert!(!plan.stacked);
        let spans: Vec<ColumnSpan> = plan.sections.iter().map(|section| section.span).collect();
        assert_eq!(
            spans,
            vec![ColumnSpan::Full, ColumnSpan::TwoThirds, ColumnSpan::OneThird]
        );
        assert_eq!(
            TODO_SPAN.portion() + POMODORO_SPAN.portion(),
            ColumnSpan::Full.portion()
        );
    }
}
