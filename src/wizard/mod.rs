//! Selection State Machine
//!
//! - `selection.rs` - per-scale `SelectionState` with the season → soil cascade
//! - `machine.rs` - `Wizard`, its events, observable states and errors

pub mod selection;
pub mod machine;

pub use machine::{Wizard, WizardError, WizardEvent, WizardState};
pub use selection::SelectionState;
