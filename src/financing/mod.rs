//! Credit simulators: loan amortization (Price and SAC) and consortium

pub mod consortium;
pub mod loan;

pub use consortium::{BidOutcome, ConsortiumInput, ConsortiumResult, ConsortiumRow};
pub use loan::{AmortizationSystem, InstallmentRow, LoanInput, LoanSchedule};
