pub mod leave;
pub mod users;

use std::sync::{Mutex, MutexGuard};

use crate::error::ApiError;
use crate::model::{leave_request::LeaveRequest, user::User};

/// In-memory state of the service: both entity collections plus the id
/// counter they share. Data is volatile and lost on restart.
///
/// actix-web runs handlers on several workers, so unlike the original
/// single-threaded design the whole store sits behind one lock; each logical
/// operation (register, apply, status update, query) locks once and runs to
/// completion, which also keeps apply's cross-collection user check
/// consistent with the append that follows it.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    leaves: Vec<LeaveRequest>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic ids starting at 1. The original derived ids from the clock,
    /// which can collide under rapid creation; uniqueness is the actual
    /// requirement, temporal meaning is not.
    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn leave_count(&self) -> usize {
        self.leaves.len()
    }
}

pub type SharedStore = Mutex<Store>;

/// A poisoned lock means a handler panicked mid-operation; surface it as the
/// generic 500 rather than propagating the panic to other workers.
pub fn lock(store: &SharedStore) -> Result<MutexGuard<'_, Store>, ApiError> {
    store
        .lock()
        .map_err(|_| ApiError::internal("Internal server error"))
}
