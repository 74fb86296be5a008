//! The batch generation pass.

use crate::{
    emit::{self, GeneratedUnit, support},
    group::{self, Diagnostic},
    scan,
    semantic::SemanticModel,
    tree::SourceTree,
};
use serde::Serialize;

///
/// GeneratorSink
///
/// Registration endpoint supplied by the host; receives every generated
/// unit of one pass.
///

pub trait GeneratorSink {
    fn register(&mut self, unit: GeneratedUnit);
}

impl GeneratorSink for Vec<GeneratedUnit> {
    fn register(&mut self, unit: GeneratedUnit) {
        self.push(unit);
    }
}

///
/// Report
///

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub trees: usize,
    pub candidates: usize,
    pub resolved: usize,
    pub skipped: usize,
    pub units: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run one generation pass over the given trees.
///
/// The pass never fails: per-field problems are skips, tree scanning is
/// total, and the boilerplate unit is registered first regardless of how
/// many candidates exist (even zero).
pub fn run(trees: &[SourceTree], sink: &mut dyn GeneratorSink) -> Report {
    let mut report = Report {
        trees: trees.len(),
        ..Report::default()
    };

    sink.register(support::support_unit());
    report.units += 1;

    let mut resolved = Vec::new();
    for tree in trees {
        let candidates = scan::scan_tree(tree);
        report.candidates += candidates.len();

        let model = SemanticModel::new(tree);
        for candidate in &candidates {
            match model.resolve(candidate) {
                Some(field) => resolved.push(field),
                None => report.skipped += 1,
            }
        }
    }
    report.resolved = resolved.len();

    let mut diagnostics = Vec::new();
    let groups = group::group_fields(resolved, &mut diagnostics);

    for group in &groups {
        sink.register(emit::container_unit(group));
        report.units += 1;
    }

    report.diagnostics = diagnostics;
    report
}

/// Convenience driver collecting the units into a vector.
#[must_use]
pub fn run_to_vec(trees: &[SourceTree]) -> (Vec<GeneratedUnit>, Report) {
    let mut units = Vec::new();
    let report = run(trees, &mut units);

    (units, report)
}
