//! Native file dialogs for exports

pub mod dialogs;
