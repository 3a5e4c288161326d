//! In-memory record store implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use hirehub_core::error::AppError;
use hirehub_core::result::AppResult;
use hirehub_entity::application::{Application, CreateApplication};
use hirehub_entity::job::{CreateJob, Job};
use hirehub_entity::user::{CreateUser, User};

/// In-memory record store for all HireHub entities.
///
/// One lock guards the whole key space, so every operation is atomic with
/// respect to all three collections — there is no partial-update
/// visibility. The lock is synchronous and never held across an await
/// point. Callers always receive clones, never references into the maps.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    users: HashMap<Uuid, User>,
    jobs: HashMap<Uuid, Job>,
    applications: HashMap<Uuid, Application>,
}

/// Generate an id not already present in the map.
///
/// v4 collisions are astronomically unlikely, but an insert must never
/// silently overwrite an existing record, so re-roll rather than assume.
fn fresh_id<V>(map: &HashMap<Uuid, V>) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !map.contains_key(&id) {
            return id;
        }
    }
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Users ────────────────────────────────────────────────────

    /// Find a user by id. Absence is a normal outcome.
    pub fn user(&self, id: Uuid) -> Option<User> {
        self.inner.read().expect("store lock poisoned").users.get(&id).cloned()
    }

    /// Find a user by username.
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Create a new user. Fails with a conflict if the username is taken.
    pub fn create_user(&self, data: CreateUser) -> AppResult<User> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.users.values().any(|u| u.username == data.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                data.username
            )));
        }

        let user = User {
            id: fresh_id(&inner.users),
            username: data.username,
            password: data.password,
        };
        inner.users.insert(user.id, user.clone());
        debug!(user_id = %user.id, "Created user");
        Ok(user)
    }

    // ── Jobs ─────────────────────────────────────────────────────

    /// All current job listings. No ordering guarantee. Never fails.
    pub fn jobs(&self) -> Vec<Job> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .jobs
            .values()
            .cloned()
            .collect()
    }

    /// Find a job by id.
    pub fn job(&self, id: Uuid) -> Option<Job> {
        self.inner.read().expect("store lock poisoned").jobs.get(&id).cloned()
    }

    /// Create a new job listing with a fresh system-generated id.
    ///
    /// Optional fields default to absent (`salary: None` unless supplied).
    pub fn create_job(&self, data: CreateJob) -> Job {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let job = Job {
            id: fresh_id(&inner.jobs),
            title: data.title,
            company: data.company,
            location: data.location,
            job_type: data.job_type,
            description: data.description,
            requirements: data.requirements,
            salary: data.salary,
            experience_level: data.experience_level,
        };
        inner.jobs.insert(job.id, job.clone());
        debug!(job_id = %job.id, title = %job.title, "Created job");
        job
    }

    /// Delete a job. Returns true iff a record existed and was removed.
    ///
    /// Does not cascade: applications referencing the job stay in place.
    pub fn delete_job(&self, id: Uuid) -> bool {
        let removed = self
            .inner
            .write()
            .expect("store lock poisoned")
            .jobs
            .remove(&id)
            .is_some();
        if removed {
            debug!(job_id = %id, "Deleted job");
        }
        removed
    }

    // ── Applications ─────────────────────────────────────────────

    /// All current applications. No ordering guarantee. Never fails.
    pub fn applications(&self) -> Vec<Application> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .applications
            .values()
            .cloned()
            .collect()
    }

    /// Find an application by id.
    pub fn application(&self, id: Uuid) -> Option<Application> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .applications
            .get(&id)
            .cloned()
    }

    /// All applications for the given job.
    ///
    /// Returns an empty vec — not an error — when the job has no
    /// applications or does not exist at all.
    pub fn applications_by_job(&self, job_id: Uuid) -> Vec<Application> {
        self.inner
            .read()
            .expect("store lock poisoned")
            .applications
            .values()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect()
    }

    /// Create a new application with a fresh id and default field values
    /// (`resume_url`/`cover_letter` absent unless supplied, status
    /// `"pending"`).
    ///
    /// The store does not check that `job_id` references an existing job;
    /// that referential check belongs to the handler layer.
    pub fn create_application(&self, data: CreateApplication) -> Application {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let application = Application {
            id: fresh_id(&inner.applications),
            job_id: data.job_id,
            full_name: data.full_name,
            email: data.email,
            phone: data.phone,
            resume_url: data.resume_url,
            cover_letter: data.cover_letter,
            status: Application::default_status(),
        };
        inner
            .applications
            .insert(application.id, application.clone());
        debug!(application_id = %application.id, job_id = %application.job_id, "Created application");
        application
    }

    /// Replace the status of an application and return the updated copy.
    ///
    /// Stores any string it is given — validating the status against the
    /// legal set is the caller's responsibility. Returns `None` if the
    /// application does not exist.
    pub fn update_application_status(&self, id: Uuid, status: &str) -> Option<Application> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let application = inner.applications.get_mut(&id)?;
        application.status = status.to_string();
        debug!(application_id = %id, status, "Updated application status");
        Some(application.clone())
    }
}
