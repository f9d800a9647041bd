/*!
Surfaces, on which results are shown.

A [Surface] is a single output region which may be cleared, and to which markup fragments may be appended.
Fragments are appended in the order given, and a clear discards everything appended before it.

Markup is a small subset of HTML: `<b>`, `<i>`, `<tt>`, `<br>`, and the entities written by [escape](markup::escape).

- [BufferSurface] keeps fragments in memory, and is useful whenever the output is inspected by some other part of a program.
- [TerminalSurface] writes to standard output, translating markup to terminal styling (or not).

Surfaces are shared between a caller and a scheduler worker, and so take `&self` and are [Send] + [Sync].
*/

pub mod buffer;
pub mod markup;
pub mod terminal;

pub use buffer::BufferSurface;
pub use terminal::TerminalSurface;

pub trait Surface: Send + Sync {
    /// Discards everything shown.
    fn clear(&self);

    /// Appends a fragment of markup to whatever is shown.
    fn show(&self, markup: &str);
}
