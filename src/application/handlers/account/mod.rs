//! Account command and query handlers.

mod create_account;
mod delete_account;
mod get_account;
mod submit_quiz;
mod update_account;

pub use create_account::{CreateAccountCommand, CreateAccountHandler};
pub use delete_account::{DeleteAccountCommand, DeleteAccountHandler};
pub use get_account::{GetAccountHandler, GetAccountQuery};
pub use submit_quiz::{SubmitQuizCommand, SubmitQuizHandler};
pub use update_account::{UpdateAccountCommand, UpdateAccountHandler};
