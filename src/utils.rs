use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Bookkeeping behind `throttle`: whether the rate window is closed and
/// whether a call arrived while it was.
#[derive(Debug, Default, PartialEq, Eq)]
struct ThrottleGate {
    closed: bool,
    pending: bool,
}

impl ThrottleGate {
    /// A call arrived; true means run it now, closing the window.
    fn on_call(&mut self) -> bool {
        if self.closed {
            self.pending = true;
            false
        } else {
            self.closed = true;
            true
        }
    }

    /// The window elapsed; true means a suppressed call gets a trailing run
    /// and the window stays closed for another round.
    fn on_elapsed(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            true
        } else {
            self.closed = false;
            false
        }
    }
}

/// Gates `f` so it runs at most once per `limit_ms`. The first call in a
/// window runs immediately; later ones collapse into a single trailing run
/// when the window elapses, so the last event of a burst is never lost.
pub fn throttle<F>(f: F, limit_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let gate = Rc::new(RefCell::new(ThrottleGate::default()));
    let f: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(f));
    move || {
        if gate.borrow_mut().on_call() {
            (&mut *f.borrow_mut())();
            schedule_window(gate.clone(), f.clone(), limit_ms);
        }
    }
}

fn schedule_window(gate: Rc<RefCell<ThrottleGate>>, f: Rc<RefCell<dyn FnMut()>>, limit_ms: u32) {
    Timeout::new(limit_ms, move || {
        if gate.borrow_mut().on_elapsed() {
            (&mut *f.borrow_mut())();
            schedule_window(gate, f, limit_ms);
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_runs_immediately() {
        let mut gate = ThrottleGate::default();
        assert!(gate.on_call());
    }

    #[test]
    fn burst_inside_the_window_collapses_into_one_trailing_run() {
        let mut gate = ThrottleGate::default();
        // scroll events at t=0, t=40 and t=80 with a 100ms window
        assert!(gate.on_call());
        assert!(!gate.on_call());
        assert!(!gate.on_call());
        // the window elapses: the suppressed events get one trailing run,
        // so the final position is re-derived instead of staying stale
        assert!(gate.on_elapsed());
        // the trailing run opened a fresh window; once that one passes
        // quietly the gate is open again
        assert!(!gate.on_elapsed());
        assert!(gate.on_call());
    }

    #[test]
    fn quiet_window_reopens_without_running() {
        let mut gate = ThrottleGate::default();
        assert!(gate.on_call());
        assert!(!gate.on_elapsed());
        assert!(gate.on_call());
    }

    #[test]
    fn trailing_run_keeps_the_window_closed() {
        let mut gate = ThrottleGate::default();
        gate.on_call();
        gate.on_call();
        assert!(gate.on_elapsed());
        assert!(!gate.on_call());
    }
}
