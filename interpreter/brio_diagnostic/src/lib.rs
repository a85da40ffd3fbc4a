//! Diagnostic reporting for the Brio interpreter.
//!
//! Every pipeline stage reports through an explicit [`Diagnostics`] sink
//! passed by reference — no ambient global error flags. The sink tracks the
//! static (lexical/syntactic) and runtime failure flags independently so the
//! interactive driver can reset one without the other between lines.

mod diagnostic;
mod sink;

pub use diagnostic::{Diagnostic, Locus, Severity};
pub use sink::Diagnostics;
