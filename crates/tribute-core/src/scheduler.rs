use smallvec::SmallVec;

/// Deferred one-shot actions. At most one task per kind is pending;
/// scheduling a kind again moves its deadline instead of adding a second task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    DismissShapingMessage,
    ClearStartingIndicator,
    Resize,
}

#[derive(Clone, Copy, Debug)]
struct ScheduledTask {
    kind: TaskKind,
    due_at: f64,
}

pub type DueTasks = SmallVec<[TaskKind; 4]>;

/// Wall-clock task list polled once per frame by the engine.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    tasks: SmallVec<[ScheduledTask; 4]>,
}

impl Scheduler {
    /// Returns `true` if an existing task of the same kind was replaced.
    pub fn schedule(&mut self, kind: TaskKind, due_at: f64) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.kind == kind) {
            task.due_at = due_at;
            return true;
        }
        self.tasks.push(ScheduledTask { kind, due_at });
        false
    }

    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.kind != kind);
        self.tasks.len() != before
    }

    /// Drop every pending task, returning how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        n
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|t| t.kind == kind)
    }

    pub fn due_at(&self, kind: TaskKind) -> Option<f64> {
        self.tasks.iter().find(|t| t.kind == kind).map(|t| t.due_at)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Remove the tasks due at `now` and append them to `out`, earliest first.
    pub fn poll(&mut self, now: f64, out: &mut DueTasks) {
        let mut due: SmallVec<[ScheduledTask; 4]> = SmallVec::new();
        self.tasks.retain(|t| {
            if t.due_at <= now {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_at.total_cmp(&b.due_at));
        out.extend(due.into_iter().map(|t| t.kind));
    }
}
