use crate::XmlResult;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

/// Progress and cancellation context of a long-running operation.
///
/// Clones share their state, so the host can keep one clone and call
/// [`cancel`](ProgressMonitor::cancel) from another thread, while the operation
/// polls [`is_canceled`](ProgressMonitor::is_canceled) on its own clone.
#[derive(Clone, Debug, Default)]
pub struct ProgressMonitor(Arc<MonitorState>);

#[derive(Debug, Default)]
struct MonitorState {
    canceled: AtomicBool,
    total_work: AtomicU64,
    work_done: AtomicU64,
    task: Mutex<Option<String>>,
    sub_total_work: AtomicU64,
    sub_work_done: AtomicU64,
    sub_task: Mutex<Option<String>>,
}

impl ProgressMonitor {
    /// Creates a fresh monitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cooperative cancellation.
    pub fn cancel(&self) {
        debug!("ProgressMonitor::cancel()");
        self.0.canceled.store(true, Ordering::SeqCst);
    }

    /// Returns true if cancellation was requested.
    pub fn is_canceled(&self) -> bool {
        self.0.canceled.load(Ordering::SeqCst)
    }

    /// Starts a new task; `total_work` is 0 if unknown.
    pub fn begin_task(&self, name: &str, total_work: u64) -> XmlResult<()> {
        trace!("ProgressMonitor::begin_task({name}, {total_work})");
        *self.0.task.lock()? = Some(name.to_string());
        self.0.total_work.store(total_work, Ordering::Relaxed);
        self.0.work_done.store(0, Ordering::Relaxed);
        Ok(())
    }

    /// Reports that some more work was done.
    pub fn worked(&self, work: u64) {
        self.0.work_done.fetch_add(work, Ordering::Relaxed);
    }

    /// Finishes the current task.
    pub fn done(&self) -> XmlResult<()> {
        *self.0.task.lock()? = None;
        Ok(())
    }

    /// Name of the current task.
    pub fn current_task(&self) -> XmlResult<Option<String>> {
        Ok(self.0.task.lock()?.clone())
    }

    /// Work done in the current or last task.
    pub fn work_done(&self) -> u64 {
        self.0.work_done.load(Ordering::Relaxed)
    }

    /// Announced total work of the current or last task.
    pub fn total_work(&self) -> u64 {
        self.0.total_work.load(Ordering::Relaxed)
    }

    /// Starts a sub-task within the current task of the host.
    ///
    /// The sub-task has its own name and counters; the task that was started with
    /// [`begin_task`](ProgressMonitor::begin_task) is left untouched.
    /// The sub-task ends when the returned guard is dropped.
    pub fn sub_task(&self, name: &str, total_work: u64) -> XmlResult<SubTask<'_>> {
        trace!("ProgressMonitor::sub_task({name}, {total_work})");
        *self.0.sub_task.lock()? = Some(name.to_string());
        self.0.sub_total_work.store(total_work, Ordering::Relaxed);
        self.0.sub_work_done.store(0, Ordering::Relaxed);
        Ok(SubTask { monitor: self })
    }

    /// Name of the running sub-task.
    pub fn current_sub_task(&self) -> XmlResult<Option<String>> {
        Ok(self.0.sub_task.lock()?.clone())
    }

    /// Work done in the running or last sub-task.
    pub fn sub_work_done(&self) -> u64 {
        self.0.sub_work_done.load(Ordering::Relaxed)
    }

    /// Announced total work of the running or last sub-task.
    pub fn sub_total_work(&self) -> u64 {
        self.0.sub_total_work.load(Ordering::Relaxed)
    }
}

/// A running sub-task of a [`ProgressMonitor`].
#[derive(Debug)]
pub struct SubTask<'a> {
    monitor: &'a ProgressMonitor,
}
impl SubTask<'_> {
    /// Returns true if cancellation was requested on the monitor.
    pub fn is_canceled(&self) -> bool {
        self.monitor.is_canceled()
    }

    /// Reports that some more work of the sub-task was done.
    pub fn worked(&self, work: u64) {
        self.monitor.0.sub_work_done.fetch_add(work, Ordering::Relaxed);
    }
}
impl Drop for SubTask<'_> {
    fn drop(&mut self) {
        if let Ok(mut sub_task) = self.monitor.0.sub_task.lock() {
            *sub_task = None;
        }
    }
}
