//! Annotation grouping
//!
//! Hosts apply decorations in batches: one batch per style level and kind. A
//! level that received nothing in this run still gets an (empty) group, so
//! applying every group also clears what a previous run left behind.

use super::annotation::{Annotation, AnnotationKind, PALETTE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleGroup {
    pub level: usize,
    pub arms: Vec<Annotation>,
    pub bars: Vec<Annotation>,
    pub bar_hooks: Vec<Annotation>,
}

impl StyleGroup {
    fn new(level: usize) -> Self {
        StyleGroup {
            level,
            ..StyleGroup::default()
        }
    }

    pub fn of_kind(&self, kind: AnnotationKind) -> &[Annotation] {
        match kind {
            AnnotationKind::Arm => &self.arms,
            AnnotationKind::Bar => &self.bars,
            AnnotationKind::BarHook => &self.bar_hooks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty() && self.bars.is_empty() && self.bar_hooks.is_empty()
    }

    fn push(&mut self, annotation: Annotation) {
        match annotation.kind {
            AnnotationKind::Arm => self.arms.push(annotation),
            AnnotationKind::Bar => self.bars.push(annotation),
            AnnotationKind::BarHook => self.bar_hooks.push(annotation),
        }
    }
}

/// A run's annotations partitioned by style level and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationGroups {
    groups: Vec<StyleGroup>,
}

impl AnnotationGroups {
    pub fn new() -> Self {
        AnnotationGroups {
            groups: (0..PALETTE_SIZE).map(StyleGroup::new).collect(),
        }
    }

    pub fn push(&mut self, annotation: Annotation) {
        let level = annotation.level % PALETTE_SIZE;
        self.groups[level].push(annotation);
    }

    pub fn level(&self, level: usize) -> &StyleGroup {
        &self.groups[level % PALETTE_SIZE]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleGroup> {
        self.groups.iter()
    }

    pub fn total(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.arms.len() + g.bars.len() + g.bar_hooks.len())
            .sum()
    }
}

impl Default for AnnotationGroups {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Annotation> for AnnotationGroups {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        let mut groups = AnnotationGroups::new();
        for annotation in iter {
            groups.push(annotation);
        }
        groups
    }
}
