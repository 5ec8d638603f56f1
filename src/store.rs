//!
//! # Document Store
//!
//! An in-memory document store holding the two record collections the
//! application works with: accounts and tasks. The collections are
//! independent; the only relationship between them is the advisory owner
//! identifier carried on each task.
//!
//! The store is an explicitly constructed value with its own lifecycle
//! (`open` at startup, `close` at shutdown), cloned into each request
//! handler via `web::Data` rather than living in ambient global state.
//! Every operation is a single atomic unit against one collection: the
//! email-uniqueness check runs under the same write lock as the insert,
//! and update/delete are find-and-modify under one lock. Concurrent
//! operations on the same document interleave with last-write-wins
//! semantics; no ordering is guaranteed between requests.

use crate::models::{Account, Task, TaskId, UserId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Faults surfaced by the store. Handlers map these onto HTTP responses;
/// the store itself performs no retries and no recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store has been closed; no further operations are accepted.
    Closed,
    /// An insert collided with the unique index on account emails.
    DuplicateEmail,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Closed => write!(f, "store is closed"),
            StoreError::DuplicateEmail => write!(f, "an account with this email already exists"),
        }
    }
}

impl std::error::Error for StoreError {}

struct Inner {
    open: AtomicBool,
    accounts: RwLock<HashMap<UserId, Account>>,
    tasks: RwLock<HashMap<TaskId, Task>>,
}

/// Handle to the document store. Cloning is cheap and every clone points
/// at the same collections.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// Opens a fresh, empty store.
    pub fn open() -> Self {
        Self {
            inner: Arc::new(Inner {
                open: AtomicBool::new(true),
                accounts: RwLock::new(HashMap::new()),
                tasks: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Closes the store. Every subsequent operation on any clone of this
    /// handle fails with [`StoreError::Closed`].
    pub fn close(&self) {
        self.inner.open.store(false, Ordering::SeqCst);
        log::info!("store closed");
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.inner.open.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Closed)
        }
    }

    /// Inserts a new account, assigning its identifier. The unique index
    /// on email is enforced here, under the same write lock as the insert;
    /// this is the guarantee the handler-level early check relies on.
    pub async fn insert_account(
        &self,
        username: &str,
        password_hash: &str,
        email: &str,
    ) -> Result<Account, StoreError> {
        self.ensure_open()?;
        let mut accounts = self.inner.accounts.write().await;
        if accounts.values().any(|a| a.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let account = Account {
            id: UserId::generate(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            email: email.to_string(),
        };
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    /// Looks up an account by email. `None` is not an error.
    pub async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.ensure_open()?;
        let accounts = self.inner.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    /// Inserts a new task, assigning its identifier. The owner identifier
    /// is taken as given; there is no check that it names an existing
    /// account.
    pub async fn insert_task(
        &self,
        user_id: UserId,
        task_name: &str,
        description: Option<&str>,
    ) -> Result<Task, StoreError> {
        self.ensure_open()?;
        let task = Task {
            id: TaskId::generate(),
            user_id,
            task_name: task_name.to_string(),
            description: description.map(str::to_string),
        };
        let mut tasks = self.inner.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Returns every task owned by `user_id`, in store-native order.
    /// An owner with no tasks gets an empty list.
    pub async fn tasks_by_owner(&self, user_id: UserId) -> Result<Vec<Task>, StoreError> {
        self.ensure_open()?;
        let tasks = self.inner.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Atomically finds the task matching both id and owner and replaces
    /// its name and description. `None` covers both a task that does not
    /// exist and one owned by someone else.
    pub async fn update_task(
        &self,
        user_id: UserId,
        task_id: TaskId,
        task_name: &str,
        description: Option<&str>,
    ) -> Result<Option<Task>, StoreError> {
        self.ensure_open()?;
        let mut tasks = self.inner.tasks.write().await;
        match tasks.get_mut(&task_id) {
            Some(task) if task.user_id == user_id => {
                task.task_name = task_name.to_string();
                task.description = description.map(str::to_string);
                Ok(Some(task.clone()))
            }
            _ => Ok(None),
        }
    }

    /// Atomically finds the task matching both id and owner and removes
    /// it, returning the pre-deletion snapshot. Same matching rule as
    /// [`update_task`](Store::update_task).
    pub async fn remove_task(
        &self,
        user_id: UserId,
        task_id: TaskId,
    ) -> Result<Option<Task>, StoreError> {
        self.ensure_open()?;
        let mut tasks = self.inner.tasks.write().await;
        let owned = tasks.get(&task_id).map_or(false, |t| t.user_id == user_id);
        if owned {
            Ok(tasks.remove(&task_id))
        } else {
            Ok(None)
        }
    }
}
