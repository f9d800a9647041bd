//! Rendering of reports as markup.
//!
//! Text taken from the input, or from a collaborator, is escaped unless the [RenderPolicy] is [Raw](RenderPolicy::Raw).
//! Markup added here is never escaped.

use std::borrow::Cow;

use crate::{
    config::RenderPolicy,
    misc::log::targets::{self},
    pipeline::{BuildReport, Invocation, SolveReport},
    structures::problem::ArtifactStyle,
    surface::{markup::escape, Surface},
};

pub const SATISFIABLE: &str = "Clause set is <b>true</b> if we assign values to variables as: ";
pub const UNSATISFIABLE: &str = "Clause set is <b>false</b> for all possible assignments to variables.";
pub const SYNTAX_ERROR: &str = "Syntax error: ";
pub const PARSE_ERROR: &str = "Parse error: ";
pub const NO_INPUT: &str = "No input.";
pub const UNKNOWN_BUILD_MODE: &str = "Unknown build mode: ";

/// Writes reports to a surface.
pub struct Renderer<'r> {
    surface: &'r dyn Surface,
    policy: RenderPolicy,
}

impl<'r> Renderer<'r> {
    pub fn new(surface: &'r dyn Surface, policy: RenderPolicy) -> Self {
        Renderer { surface, policy }
    }

    /// Untrusted text, as markup.
    fn text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.policy {
            RenderPolicy::Escape => Cow::Owned(escape(text)),
            RenderPolicy::Raw => Cow::Borrowed(text),
        }
    }

    /// Untrusted text in a fixed-width font, with newlines as line breaks.
    fn typewriter(&self, text: &str) -> String {
        format!("<tt>{}</tt>", self.text(text).replace('\n', "<br>"))
    }

    fn show(&self, markup: &str) {
        log::trace!(target: targets::RENDER, "{markup}");
        self.surface.show(markup);
    }

    pub fn solve(&self, report: &SolveReport) {
        match report {
            SolveReport::SyntaxError(message) => {
                self.show(&format!("{SYNTAX_ERROR}{}", self.text(message)));
            }

            SolveReport::Solved { outcome, names } => {
                if !outcome.trace.is_empty() {
                    self.show(&format!("{}<br>", self.typewriter(&outcome.trace.join("\n"))));
                }

                match outcome.result.assignment_labels(names) {
                    Some(labels) => {
                        let mut markup = SATISFIABLE.to_string();
                        for label in labels {
                            markup.push_str(&self.text(&label));
                            markup.push(' ');
                        }
                        self.show(&markup);
                    }

                    None => self.show(UNSATISFIABLE),
                }
            }
        }
    }

    pub fn build(&self, report: &BuildReport) {
        match report {
            BuildReport::NoInput => self.show(NO_INPUT),

            BuildReport::ParseError(message) => {
                self.show(&format!("{PARSE_ERROR}{}", self.text(message)));
            }

            BuildReport::Artifact(artifact) => match artifact.style {
                ArtifactStyle::Verbatim => self.show(&self.text(&artifact.text)),
                ArtifactStyle::Typewriter => self.show(&self.typewriter(&artifact.text)),
            },
        }
    }

    pub fn unknown_build_mode(&self, name: &str) {
        self.show(&format!("{UNKNOWN_BUILD_MODE}{}.", self.text(name)));
    }

    /// The time taken so far by an invocation.
    pub fn elapsed(&self, invocation: &Invocation) {
        self.show(&format!("<br><i>Time: {} ms</i>", invocation.passed_time()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        solve::{SolveOutcome, Stats},
        structures::problem::SolveResult,
        surface::BufferSurface,
    };

    fn solved(result: SolveResult, names: &[&str]) -> SolveReport {
        SolveReport::Solved {
            outcome: SolveOutcome {
                result,
                trace: vec![],
                stats: Stats::default(),
            },
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn assignments() {
        let surface = BufferSurface::default();
        let renderer = Renderer::new(&surface, RenderPolicy::Escape);

        renderer.solve(&solved(SolveResult::Assignment(vec![1, -2]), &[]));
        assert_eq!(surface.contents(), format!("{SATISFIABLE}1 -2 "));

        surface.clear();
        renderer.solve(&solved(SolveResult::Assignment(vec![1, -2]), &["p", "q"]));
        assert_eq!(surface.contents(), format!("{SATISFIABLE}p -q "));

        surface.clear();
        renderer.solve(&solved(SolveResult::Unsatisfiable, &[]));
        assert_eq!(surface.contents(), UNSATISFIABLE);
    }

    #[test]
    fn escaping_policy() {
        let surface = BufferSurface::default();
        let report = SolveReport::SyntaxError("unexpected '<' at line 1".to_string());

        Renderer::new(&surface, RenderPolicy::Escape).solve(&report);
        assert_eq!(
            surface.contents(),
            "Syntax error: unexpected &#39;&lt;&#39; at line 1"
        );

        surface.clear();
        Renderer::new(&surface, RenderPolicy::Raw).solve(&report);
        assert_eq!(surface.contents(), "Syntax error: unexpected '<' at line 1");
    }

    #[test]
    fn artifacts() {
        let surface = BufferSurface::default();
        let renderer = Renderer::new(&surface, RenderPolicy::Escape);

        renderer.build(&BuildReport::Artifact(
            crate::structures::problem::BuildArtifact::typewriter("p | value\nF | F".to_string()),
        ));
        assert_eq!(surface.contents(), "<tt>p | value<br>F | F</tt>");

        surface.clear();
        renderer.build(&BuildReport::NoInput);
        assert_eq!(surface.fragments(), vec![NO_INPUT]);
    }

    #[test]
    fn traces_precede_results() {
        let surface = BufferSurface::default();
        let renderer = Renderer::new(&surface, RenderPolicy::Escape);

        let report = SolveReport::Solved {
            outcome: SolveOutcome {
                result: SolveResult::Unsatisfiable,
                trace: vec!["decide p".to_string(), "backtrack p".to_string()],
                stats: Stats::default(),
            },
            names: vec!["p".to_string()],
        };
        renderer.solve(&report);

        assert_eq!(
            surface.fragments(),
            vec!["<tt>decide p<br>backtrack p</tt><br>", UNSATISFIABLE]
        );
    }
}
