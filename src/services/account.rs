//! Account service implementation
//!
//! Email-lookup "login", signup, and logout. No passwords or tokens beyond
//! the opaque session id: a matching student row is the whole credential.

use tracing::{debug, info, warn};

use crate::database::StudentRepository;
use crate::models::student::{CreateStudentRequest, Student};
use crate::session::SessionStore;
use crate::utils::errors::{EventraError, Result};
use crate::utils::logging::log_account_action;

/// Reject blank signup fields before touching the store
fn validate_signup(request: &CreateStudentRequest) -> Result<()> {
    let fields = [
        ("name", &request.name),
        ("email", &request.email),
        ("usn", &request.usn),
        ("contact_no", &request.contact_no),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(EventraError::InvalidInput(format!(
                "{} must not be empty",
                field
            )));
        }
    }

    Ok(())
}

/// Account service for login, signup, and session lifecycle
#[derive(Clone)]
pub struct AccountService {
    students: StudentRepository,
    sessions: SessionStore,
}

impl AccountService {
    /// Create a new AccountService instance
    pub fn new(students: StudentRepository, sessions: SessionStore) -> Self {
        Self { students, sessions }
    }

    /// Log a student in by exact email match and establish their session.
    ///
    /// An unknown email is reported as not-found; no account is auto-created,
    /// the caller directs the user to sign up instead.
    pub async fn login(&self, token: &str, email: &str) -> Result<Student> {
        debug!(email = %email, "Login attempt");

        let student = self
            .students
            .find_by_email(email)
            .await?
            .ok_or_else(|| EventraError::StudentNotFound {
                email: email.to_string(),
            })?;

        self.sessions.establish(token, &student).await?;
        log_account_action(student.id, "login", None);

        Ok(student)
    }

    /// Create a student account and establish a session exactly like login.
    ///
    /// Checks for an existing account first so the common case gets a clean
    /// conflict; the unique constraint still backs it up, so a race between
    /// two signups for the same email resolves to one row and one conflict.
    pub async fn signup(&self, token: &str, request: CreateStudentRequest) -> Result<Student> {
        validate_signup(&request)?;
        debug!(email = %request.email, "Signup attempt");

        if self.students.find_by_email(&request.email).await?.is_some() {
            warn!(email = %request.email, "Signup rejected, email already registered");
            return Err(EventraError::EmailExists {
                email: request.email,
            });
        }

        let email = request.email.clone();
        let student = match self.students.create(request).await {
            Ok(student) => student,
            Err(EventraError::Database(sqlx::Error::Database(db_err)))
                if db_err.is_unique_violation() =>
            {
                return Err(EventraError::EmailExists { email });
            }
            Err(err) => return Err(err),
        };

        self.sessions.establish(token, &student).await?;
        log_account_action(student.id, "signup", None);
        info!(student_id = student.id, "New student account created");

        Ok(student)
    }

    /// Clear the session. Idempotent: logging out twice is fine.
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.sessions.clear(token).await
    }

    /// The currently logged-in student id for this session, if any
    pub async fn current(&self, token: &str) -> Result<Option<i64>> {
        self.sessions.current(token).await
    }

    /// The student snapshot stored when the session was established
    pub async fn snapshot(&self, token: &str) -> Result<Option<Student>> {
        self.sessions.snapshot(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn signup_request() -> CreateStudentRequest {
        CreateStudentRequest {
            name: "Ann".to_string(),
            email: "ann@x.edu".to_string(),
            usn: "1AB1".to_string(),
            contact_no: "555".to_string(),
        }
    }

    #[test]
    fn test_complete_signup_passes_validation() {
        assert!(validate_signup(&signup_request()).is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let mut request = signup_request();
        request.email = "   ".to_string();
        assert_matches!(
            validate_signup(&request),
            Err(EventraError::InvalidInput(_))
        );

        let mut request = signup_request();
        request.usn = String::new();
        assert!(validate_signup(&request).is_err());
    }
}
