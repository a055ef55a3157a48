// src/pipeline/mod.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use log::debug;

/// The per-candidate predicate run by workers: reads the candidate, writes
/// the result into the slot.
pub type CheckFn<I, O> = Arc<dyn Fn(&I, &mut Option<O>) + Send + Sync>;

/// Synchronization the coordinator shares with every worker: workers
/// announce "I am now idle" through this condvar.
struct Shared {
    lock: Mutex<()>,
    cond: Condvar,
}

/// Slot contents owned by one worker, guarded by the pod's private mutex.
struct Slot<I, O> {
    input: Option<I>,
    result: Option<O>,
    payload: Option<CheckFn<I, O>>,
}

/// One worker: its slot, its private condvar, and the busy/terminate flags.
///
/// The flags live outside the slot mutex so the coordinator can poll them
/// while holding only the shared lock; their transitions are published
/// under the shared mutex (busy) or the slot mutex (terminate), which
/// orders them against the observing side.
struct Pod<I, O> {
    slot: Mutex<Slot<I, O>>,
    cond: Condvar,
    busy: AtomicBool,
    terminate: AtomicBool,
    shared: Arc<Shared>,
}

impl<I, O> Pod<I, O> {
    fn new(shared: Arc<Shared>) -> Self {
        Pod {
            slot: Mutex::new(Slot {
                input: None,
                result: None,
                payload: None,
            }),
            cond: Condvar::new(),
            busy: AtomicBool::new(false),
            terminate: AtomicBool::new(false),
            shared,
        }
    }

    fn set_payload(&self, payload: CheckFn<I, O>) {
        let mut slot = self.slot.lock().unwrap();
        slot.payload = Some(payload);
    }

    /// Hands the worker a new candidate and wakes it.
    fn assign(&self, value: I) {
        let mut slot = self.slot.lock().unwrap();
        slot.input = Some(value);
        slot.result = None;
        self.busy.store(true, Ordering::SeqCst);
        self.cond.notify_one();
    }

    fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Removes the finished (input, result) pair, if the pod holds one.
    fn take_pair(&self) -> Option<(I, O)> {
        let mut slot = self.slot.lock().unwrap();
        match (slot.input.take(), slot.result.take()) {
            (Some(input), Some(result)) => Some((input, result)),
            (input, _) => {
                // Nothing consumable; put back whatever was there.
                slot.input = input;
                None
            }
        }
    }

    /// Flags the worker for termination and wakes it. Acknowledged only
    /// between jobs.
    fn shut_down(&self) {
        let _slot = self.slot.lock().unwrap();
        self.terminate.store(true, Ordering::SeqCst);
        self.cond.notify_one();
    }
}

fn worker_loop<I, O>(pod: Arc<Pod<I, O>>)
where
    I: Clone,
{
    let mut slot = pod.slot.lock().unwrap();
    loop {
        if pod.terminate.load(Ordering::SeqCst) {
            return;
        }
        if !pod.busy.load(Ordering::SeqCst) {
            slot = pod.cond.wait(slot).unwrap();
            continue;
        }

        let input = slot.input.clone().expect("busy worker without input");
        let payload = slot.payload.clone().expect("busy worker without payload");
        // The check runs with no lock held.
        drop(slot);
        let mut result = None;
        payload(&input, &mut result);

        slot = pod.slot.lock().unwrap();
        slot.result = result;
        drop(slot);
        {
            // Publishing busy = false under the shared mutex orders it
            // against the coordinator's wait on the shared condvar.
            let _idle = pod.shared.lock.lock().unwrap();
            pod.busy.store(false, Ordering::SeqCst);
            pod.shared.cond.notify_one();
        }
        slot = pod.slot.lock().unwrap();
    }
}

/// Parallel search driver: one coordinator (the caller of [`Pipeline::run`])
/// and a set of worker threads, each applying a check to candidates pulled
/// from an input stream, with results funneled back into a single callback.
///
/// Callback order is unrelated to input order. The only cancellation signal
/// is the callback returning `true`. Workers live as long as the pipeline;
/// dropping it flags and joins them.
pub struct Pipeline<I, O> {
    shared: Arc<Shared>,
    pods: Vec<Arc<Pod<I, O>>>,
    handles: Vec<JoinHandle<()>>,
}

impl<I, O> Pipeline<I, O>
where
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    /// A pipeline with `threads − 1` workers: the coordinator is counted
    /// against one core. With `threads` of 0 or 1 no workers are spawned
    /// and [`Pipeline::run`] executes everything on the calling thread.
    pub fn new(threads: usize) -> Self {
        let shared = Arc::new(Shared {
            lock: Mutex::new(()),
            cond: Condvar::new(),
        });
        let mut pods = Vec::new();
        let mut handles = Vec::new();
        if threads > 1 {
            pods.reserve(threads - 1);
            for _ in 0..threads - 1 {
                let pod = Arc::new(Pod::new(shared.clone()));
                let handle = thread::spawn({
                    let pod = pod.clone();
                    move || worker_loop(pod)
                });
                pods.push(pod);
                handles.push(handle);
            }
        }
        debug!("pipeline ready with {} workers", pods.len());
        Pipeline {
            shared,
            pods,
            handles,
        }
    }

    /// Number of worker threads (0 in single-threaded mode).
    pub fn workers(&self) -> usize {
        self.pods.len()
    }

    fn count_busy(&self) -> usize {
        self.pods.iter().filter(|pod| pod.is_busy()).count()
    }

    /// Pulls candidates from `input`, runs `check` on them across the
    /// workers, and feeds every (candidate, result) pair to `callback`
    /// until it returns `true`.
    ///
    /// Once stopped, still-running workers are awaited. With
    /// `strict = false` their unconsumed results are drained through the
    /// callback as well; by default they are discarded.
    pub fn run<F, C>(&mut self, mut input: F, check: CheckFn<I, O>, mut callback: C, strict: bool)
    where
        F: FnMut() -> I,
        C: FnMut(&I, &O) -> bool,
    {
        if self.pods.is_empty() {
            // Degenerate mode: input, check, callback in sequence on the
            // coordinator thread.
            loop {
                let value = input();
                let mut result = None;
                check(&value, &mut result);
                let result = result.expect("check left the result slot empty");
                if callback(&value, &result) {
                    return;
                }
            }
        }

        let mut guard = self.shared.lock.lock().unwrap();
        for pod in &self.pods {
            pod.set_payload(check.clone());
            pod.assign(input());
        }
        'dispatch: loop {
            while self.count_busy() == self.pods.len() {
                guard = self.shared.cond.wait(guard).unwrap();
            }
            for pod in &self.pods {
                if pod.is_busy() {
                    continue;
                }
                if let Some((value, result)) = pod.take_pair() {
                    if callback(&value, &result) {
                        break 'dispatch;
                    }
                }
                pod.assign(input());
            }
        }
        while self.count_busy() > 0 {
            guard = self.shared.cond.wait(guard).unwrap();
        }
        if !strict {
            for pod in &self.pods {
                if let Some((value, result)) = pod.take_pair() {
                    callback(&value, &result);
                }
            }
        }
        drop(guard);
    }
}

impl<I, O> Default for Pipeline<I, O>
where
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
{
    /// One thread per core, i.e. `num_cpus::get() − 1` workers next to the
    /// coordinator.
    fn default() -> Self {
        Pipeline::new(num_cpus::get())
    }
}

impl<I, O> Drop for Pipeline<I, O> {
    fn drop(&mut self) {
        for pod in &self.pods {
            pod.shut_down();
        }
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}
