/*!
A front end for propositional logic.

Text, in either DIMACS or formula syntax, is taken through one of two pipelines:

- *Solve*, which determines whether the clauses of the text are satisfiable, and if so gives a satisfying assignment.
- *Build*, which makes one of a parse tree, a truth table, or a CNF rendering of the text.

Both pipelines share the same stages: parse, dispatch on the parser output, convert a formula to CNF and rename its variables, and then solve or build.
The result is rendered as light markup to a [Surface](surface::Surface).

The parts of a pipeline:
- A [Parser](parse::Parser), from text to [ParserOutput](structures::problem::ParserOutput).
- A [Converter](convert::Converter), from formulas to clauses and from parser output to printable text.
- A [Solver](solve::Solver), from clauses to a [SolveResult](structures::problem::SolveResult).

Each has a default implementation, and any may be swapped for another when building a [Pipeline](pipeline::Pipeline).

A [Frontend](frontend::Frontend) wraps a pipeline and a surface, clearing the surface and then running the pipeline after a short delay on a worker thread.

```rust
# use std::sync::Arc;
# use proplog::config::{Config, SolverAlgorithm, TraceMethod};
# use proplog::frontend::Frontend;
# use proplog::pipeline::Pipeline;
# use proplog::surface::BufferSurface;
let surface = Arc::new(BufferSurface::default());
let mut frontend = Frontend::new(Pipeline::new(Config::default()), surface.clone());

frontend
    .solve("p cnf 1 2\n1 0\n-1 0", SolverAlgorithm::Better, TraceMethod::None)
    .unwrap();
frontend.finish();

assert_eq!(
    surface.contents(),
    "Clause set is <b>false</b> for all possible assignments to variables."
);
```

# Logging

Calls to [log](https://docs.rs/log/latest/log/) are made throughout, with targets listed in `misc::log::targets`.
No logger is provided by the library.
*/

#![allow(clippy::single_match)]

pub mod config;
pub mod convert;
pub mod frontend;
pub mod parse;
pub mod pipeline;
pub mod solve;
pub mod structures;
pub mod surface;
pub mod types;

mod misc;
