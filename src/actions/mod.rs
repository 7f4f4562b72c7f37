pub mod accounting;
pub mod catalogs;
pub mod clients;
pub mod loans;

pub use accounting::{create_journal_entry, get_trial_balance, list_accounts};
pub use catalogs::{list_agencies, list_holidays};
pub use clients::{create_client, get_client, list_clients};
pub use loans::{disburse_loan, get_loan_schedule, list_loans};
