use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::BootstrapAccount,
    data::{debt::DebtRepository, student::StudentRepository, teacher::TeacherRepository},
    error::{
        credential::CredentialError, notify::NotifyError, roster::RosterError, AppError,
    },
    mail::{parse_address, CredentialNotifier},
    model::roster::{DebtOutcome, PersonKind, ProvisionOutcome, RosterSheet},
    service::roster::{
        reconcile::ReconcileService,
        resolver::{DebtKey, NaturalKeyResolver, Resolved},
    },
    util::hasher::{Argon2Hasher, PasswordHasher},
};


const STUDENT_CELL: &str = "Ivanov Petr Sergeevich Group101 petrov@mail.com";
const TEACHER_CELL: &str = "Smirnov Anna Viktorovna anna@mail.com";

fn sheet(rows: &[&[&str]]) -> RosterSheet {
    RosterSheet::new(
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

fn hasher() -> Argon2Hasher {
    Argon2Hasher::with_params(8, 1, 1).unwrap()
}

/// Records every delivered password; rejects addresses lettre cannot parse.
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    fn password_for(&self, email: &str) -> Option<String> {
        self.sent()
            .into_iter()
            .find(|(to, _)| to == email)
            .map(|(_, password)| password)
    }
}

#[async_trait]
impl CredentialNotifier for RecordingNotifier {
    async fn send_password(&self, email: &str, password: &str) -> Result<(), NotifyError> {
        parse_address(email)?;
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        Ok(())
    }
}

/// Records deliveries like `RecordingNotifier`, each one taking `delay`.
struct SlowNotifier {
    inner: RecordingNotifier,
    delay: Duration,
}

impl SlowNotifier {
    fn new(delay: Duration) -> Self {
        Self {
            inner: RecordingNotifier::default(),
            delay,
        }
    }
}

#[async_trait]
impl CredentialNotifier for SlowNotifier {
    async fn send_password(&self, email: &str, password: &str) -> Result<(), NotifyError> {
        tokio::time::sleep(self.delay).await;
        self.inner.send_password(email, password).await
    }
}

struct UnreachableNotifier;

#[async_trait]
impl CredentialNotifier for UnreachableNotifier {
    async fn send_password(&self, _email: &str, _password: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("connection refused".to_string()))
    }
}

/// Hashes normally for the first `allowed` calls, then fails.
struct ExhaustedHasher {
    inner: Argon2Hasher,
    allowed: usize,
    calls: AtomicUsize,
}

impl ExhaustedHasher {
    fn new(allowed: usize) -> Self {
        Self {
            inner: hasher(),
            allowed,
            calls: AtomicUsize::new(0),
        }
    }
}

impl PasswordHasher for ExhaustedHasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) >= self.allowed {
            return Err(CredentialError::HashingFailed("out of memory".to_string()));
        }
        self.inner.hash(plaintext)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        self.inner.verify(plaintext, hash)
    }
}
