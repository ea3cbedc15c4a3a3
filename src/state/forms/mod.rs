//! Form domain layer: live field values and per-step page state

mod field;
mod page;

pub use field::FormField;
pub use page::{
    BusinessPage, BusinessSlot, ContactPage, DetailsPage, DetailsSlot, NavAction, NavRow, Page,
    Step, StepPage,
};
