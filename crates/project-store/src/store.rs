//! Observable Project Store
//!
//! Owns the project collection and broadcasts an owned snapshot to every
//! subscriber after each mutation. Handles are cheap to clone and all point
//! at the same collection.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::project::{Project, ProjectId, ProjectStatus};

/// Callback receiving a snapshot of the full project sequence
pub type Listener = Arc<dyn Fn(Vec<Project>) + Send + Sync>;

/// Token returned by [`ProjectStore::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Result of [`ProjectStore::move_project`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Project already had the requested status
    Unchanged,
    NotFound,
}

#[derive(Default)]
struct StoreState {
    projects: Vec<Project>,
    listeners: Vec<(Subscription, Listener)>,
    last_project_id: u64,
    last_subscription: u64,
}

#[derive(Clone, Default)]
pub struct ProjectStore {
    state: Arc<Mutex<StoreState>>,
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ProjectStore")
            .field("projects", &state.projects)
            .field("subscribers", &state.listeners.len())
            .finish()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // A listener panic never happens under the lock, so the data is intact
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a new active project and notify subscribers
    ///
    /// Input is not validated here; see [`crate::gather_input`].
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = {
            let mut state = self.lock();
            state.last_project_id += 1;
            let id = ProjectId(state.last_project_id);
            state.projects.push(Project::new(id, title.into(), description.into(), people));
            id
        };
        log::debug!("[STORE] Added project {}", id);
        self.notify();
        id
    }

    /// Set the status of the first project with `id`
    ///
    /// Subscribers are notified whatever the outcome, including when the
    /// id is unknown or the status was already `status`.
    pub fn move_project(&self, id: ProjectId, status: ProjectStatus) -> MoveOutcome {
        let outcome = {
            let mut state = self.lock();
            match state.projects.iter_mut().find(|p| p.id == id) {
                Some(project) if project.status != status => {
                    project.status = status;
                    MoveOutcome::Moved
                }
                Some(_) => MoveOutcome::Unchanged,
                None => MoveOutcome::NotFound,
            }
        };
        log::debug!("[STORE] Move project {} to {}: {:?}", id, status.as_str(), outcome);
        self.notify();
        outcome
    }

    /// Register a listener. Listeners run in registration order.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Vec<Project>) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        state.last_subscription += 1;
        let subscription = Subscription(state.last_subscription);
        state.listeners.push((subscription, Arc::new(listener)));
        subscription
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut state = self.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(s, _)| *s != subscription);
        state.listeners.len() != before
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.lock().projects.clone()
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<Project> {
        filter_by_status(&self.lock().projects, status)
    }

    pub fn find(&self, id: ProjectId) -> Option<Project> {
        self.lock().projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Hand every listener its own copy of the current projects.
    /// The lock is released before each call so listeners may call back into
    /// the store; the copy is taken per listener so a listener that mutates
    /// the store never leaves later ones with an older snapshot.
    fn notify(&self) {
        let listeners: Vec<Listener> = self.lock().listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            let projects = self.snapshot();
            listener(projects);
        }
    }
}

/// Projects with the given status, in insertion order
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects.iter().filter(|p| p.status == status).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store with a listener that records every snapshot it receives
    fn recording_store() -> (ProjectStore, Arc<Mutex<Vec<Vec<Project>>>>) {
        let store = ProjectStore::new();
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);
        store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot));
        (store, received)
    }

    #[test]
    fn test_add_project() {
        let (store, received) = recording_store();

        let id = store.add_project("Build a thing", "With care", 3);

        assert_eq!(store.len(), 1);
        let project = store.find(id).expect("project should exist");
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.title, "Build a thing");
        assert_eq!(project.people, 3);
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let store = ProjectStore::new();
        let a = store.add_project("First", "First one", 1);
        let b = store.add_project("Second", "Second one", 1);
        assert!(a < b);
        assert_eq!(a, ProjectId(1));
    }

    #[test]
    fn test_move_project() {
        let (store, received) = recording_store();
        let id = store.add_project("Title", "Description", 2);

        assert_eq!(store.move_project(id, ProjectStatus::Finished), MoveOutcome::Moved);
        assert_eq!(store.find(id).unwrap().status, ProjectStatus::Finished);
        assert_eq!(store.projects_with_status(ProjectStatus::Active).len(), 0);
        assert_eq!(store.projects_with_status(ProjectStatus::Finished).len(), 1);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 2);
        assert_eq!(received[1][0].status, ProjectStatus::Finished);
    }

    #[test]
    fn test_move_unknown_id_still_broadcasts() {
        let (store, received) = recording_store();
        store.add_project("Title", "Description", 2);
        let before = store.snapshot();

        let outcome = store.move_project(ProjectId(99), ProjectStatus::Finished);

        assert_eq!(outcome, MoveOutcome::NotFound);
        assert_eq!(store.snapshot(), before);
        assert_eq!(received.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_move_to_same_status_still_broadcasts() {
        let (store, received) = recording_store();
        let id = store.add_project("Title", "Description", 2);
        let before = store.snapshot();

        let outcome = store.move_project(id, ProjectStatus::Active);

        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(store.snapshot(), before);
        assert_eq!(received.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_every_subscriber_called_once() {
        let store = ProjectStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let lengths = Arc::new(Mutex::new(Vec::new()));
        for _ in 0..5 {
            let calls = Arc::clone(&calls);
            let lengths = Arc::clone(&lengths);
            store.subscribe(move |snapshot| {
                calls.fetch_add(1, Ordering::SeqCst);
                lengths.lock().unwrap().push(snapshot.len());
            });
        }

        store.add_project("Title", "Description", 1);

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        assert_eq!(*lengths.lock().unwrap(), vec![store.len(); 5]);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let store = ProjectStore::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for n in 0..3 {
            let order = Arc::clone(&order);
            store.subscribe(move |_| order.lock().unwrap().push(n));
        }
        store.add_project("Title", "Description", 1);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_snapshots_do_not_alias() {
        let (store, received) = recording_store();
        let id = store.add_project("Title", "Description", 1);
        store.move_project(id, ProjectStatus::Finished);

        let mut received = received.lock().unwrap();
        received[0][0].title = "Changed".to_string();
        received[0].clear();

        assert_eq!(received[1].len(), 1);
        assert_eq!(received[1][0].title, "Title");
        assert_eq!(store.find(id).unwrap().title, "Title");
    }

    #[test]
    fn test_unsubscribe() {
        let (store, received) = recording_store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 2);

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.add_project("Title", "Description", 1);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(received.lock().unwrap().len(), 1);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_listener_can_reenter_store() {
        let store = ProjectStore::new();
        let handle = store.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_listener = Arc::clone(&seen);
        store.subscribe(move |snapshot| {
            // Reads through another handle while the broadcast is running
            seen_in_listener.store(handle.len(), Ordering::SeqCst);
            assert_eq!(snapshot.len(), handle.snapshot().len());
        });

        store.add_project("Title", "Description", 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_later_listener_sees_mutation_from_earlier_listener() {
        let store = ProjectStore::new();
        let handle = store.clone();
        store.subscribe(move |snapshot| {
            if snapshot.len() == 1 {
                handle.add_project("Follow-up", "Added from a listener", 1);
            }
        });
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lengths);
        store.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.len()));

        store.add_project("Title", "Description", 1);

        assert_eq!(store.len(), 2);
        let lengths = lengths.lock().unwrap();
        assert_eq!(lengths.last(), Some(&2));
        assert!(lengths.iter().all(|&len| len == 2));
    }

    #[test]
    fn test_filter_by_status_keeps_order() {
        let store = ProjectStore::new();
        let a = store.add_project("Alpha", "First one", 1);
        let b = store.add_project("Bravo", "Second one", 1);
        let c = store.add_project("Charlie", "Third one", 1);
        store.move_project(b, ProjectStatus::Finished);

        let active: Vec<ProjectId> = filter_by_status(&store.snapshot(), ProjectStatus::Active)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(active, vec![a, c]);
    }

    proptest! {
        #[test]
        fn prop_add_grows_by_one(
            title in "[a-z]{5,20}",
            description in "[a-z ]{5,40}",
            people in 1u32..1000,
            existing in 0usize..10,
        ) {
            let store = ProjectStore::new();
            for n in 0..existing {
                store.add_project(format!("Project {n}"), "Existing", 1);
            }
            let before = store.len();

            let id = store.add_project(title, description, people);

            prop_assert_eq!(store.len(), before + 1);
            prop_assert_eq!(store.snapshot().last().map(|p| p.id), Some(id));
            prop_assert_eq!(store.find(id).map(|p| p.status), Some(ProjectStatus::Active));
        }
    }
}
