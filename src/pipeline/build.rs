//! The build pipeline.

use crate::{
    config::BuildSelect,
    convert::Printable,
    misc::log::targets::{self},
    pipeline::{Invocation, Pipeline},
    structures::problem::{BuildArtifact, ParserOutput},
    surface::Surface,
    types::err::{self},
};

/// What the build pipeline made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildReport {
    /// The text was empty, and so was not parsed.
    NoInput,

    /// The text could not be parsed.
    ParseError(String),

    Artifact(BuildArtifact),
}

/// A JSON dump of some parser output, with quotes removed.
fn parse_tree(output: &ParserOutput) -> Result<String, err::ConvertError> {
    let json = match output {
        ParserOutput::Dimacs { clauses, .. } => serde_json::to_string(clauses),
        ParserOutput::Formula(formula) => serde_json::to_string(formula),
        ParserOutput::Error(_) => return Err(err::ConvertError::NoFormula),
    };

    match json {
        Ok(json) => Ok(json.replace('"', "")),
        Err(e) => {
            log::error!(target: targets::PIPELINE, "Failed to dump a parse tree: {e}");
            Err(err::ConvertError::Dump)
        }
    }
}

impl Pipeline {
    /// Parses `text` and builds the artifact selected.
    ///
    /// The parser is not called on empty text, and no artifact is built on a parse error.
    pub fn build_report(
        &self,
        text: &str,
        build_select: BuildSelect,
    ) -> Result<BuildReport, err::ErrorKind> {
        if text.trim().is_empty() {
            return Ok(BuildReport::NoInput);
        }

        let output = self.parser.parse(text);
        if let ParserOutput::Error(message) = &output {
            return Ok(BuildReport::ParseError(message.clone()));
        }

        let artifact = match build_select {
            BuildSelect::ParseTree => BuildArtifact::verbatim(parse_tree(&output)?),

            BuildSelect::TruthTable => {
                BuildArtifact::typewriter(self.converter.print_truthtable(&output)?)
            }

            BuildSelect::Cnf => {
                let text = match &output {
                    ParserOutput::Dimacs { clauses, .. } => {
                        self.converter.parsed_print(Printable::Clauses(clauses), &[])
                    }

                    ParserOutput::Formula(formula) => {
                        let named = self.converter.formula_to_cnf(formula)?;
                        self.converter
                            .parsed_print(Printable::NamedClauses(&named), &[])
                    }

                    ParserOutput::Error(_) => return Err(err::ConvertError::NoFormula.into()),
                };
                BuildArtifact::typewriter(text)
            }
        };

        Ok(BuildReport::Artifact(artifact))
    }

    /// The body of the build pipeline: build, and show the artifact on `surface`.
    pub fn build(
        &self,
        invocation: &Invocation,
        text: &str,
        build_select: BuildSelect,
        surface: &dyn Surface,
    ) -> Result<(), err::ErrorKind> {
        log::info!(target: targets::PIPELINE, "Build {build_select}");

        let report = self.build_report(text, build_select)?;

        let renderer = self.renderer(surface);
        renderer.build(&report);
        if self.config.show_elapsed {
            renderer.elapsed(invocation);
        }

        log::info!(target: targets::PIPELINE, "Build finished in {:?}", invocation.elapsed());
        Ok(())
    }
}
