//! Endpoint facades, one per InfoMark resource group
//!
//! Every facade borrows the client's [`Transport`](crate::Transport) and
//! holds no other state. Operations the remote API offers but this client
//! does not wire up yet fail with [`InfomarkError::NotImplemented`].

use tracing::warn;

use crate::error::{InfomarkError, Result};

/// Build an API route from displayable segments
macro_rules! route {
    ($($segment:expr),* $(,)?) => {
        $crate::route::route(&[$($segment.to_string()),*])
    };
}

mod account;
mod auth;
mod common;
mod courses;
mod email;
mod enrollments;
mod exams;
mod grades;
mod groups;
mod internal;
mod materials;
mod sheets;
mod submissions;
mod tasks;
mod users;

pub use account::Account;
pub use auth::Auth;
pub use common::Common;
pub use courses::Courses;
pub use email::Email;
pub use enrollments::Enrollments;
pub use exams::Exams;
pub use grades::Grades;
pub use groups::Groups;
pub use internal::Internal;
pub use materials::Materials;
pub use sheets::Sheets;
pub use submissions::Submissions;
pub use tasks::Tasks;
pub use users::Users;

/// Fail a placeholder endpoint, naming its verb and route
fn not_implemented<T>(method: &str, path: String) -> Result<T> {
    let endpoint = format!("{} {}", method, path);
    warn!("Endpoint {} is not implemented", endpoint);
    Err(InfomarkError::not_implemented(endpoint))
}
