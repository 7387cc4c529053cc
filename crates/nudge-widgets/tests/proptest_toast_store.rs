//! Property-based invariant tests for the toast store.
//!
//! 1. Never more than `max_visible` toasts on screen
//! 2. Never more than `max_queued` toasts waiting
//! 3. Every shown toast is hidden at most once, and only after being shown
//! 4. Accepted + rejected always equals pushed

use std::collections::HashSet;

use nudge_widgets::toast::{Toast, ToastKind};
use nudge_widgets::toast_store::{ToastAction, ToastConfig, ToastStore};
use proptest::prelude::*;
use web_time::{Duration, Instant};

#[derive(Debug, Clone)]
enum Op {
    Push(u8, u8),
    Persistent(u8),
    Dismiss(usize),
    DismissAll,
    Tick(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..4, 0u8..6).prop_map(|(k, m)| Op::Push(k, m)),
        1 => (0u8..6).prop_map(Op::Persistent),
        2 => (0usize..16).prop_map(Op::Dismiss),
        1 => Just(Op::DismissAll),
        4 => (0u64..3_000).prop_map(Op::Tick),
    ]
}

fn kind(k: u8) -> ToastKind {
    match k {
        0 => ToastKind::Success,
        1 => ToastKind::Error,
        2 => ToastKind::Warning,
        _ => ToastKind::Info,
    }
}

proptest! {
    #[test]
    fn store_invariants_hold(
        max_visible in 1usize..5,
        max_queued in 0usize..6,
        ops in prop::collection::vec(op_strategy(), 0..120),
    ) {
        let config = ToastConfig::new()
            .max_visible(max_visible)
            .max_queued(max_queued)
            .default_duration(Duration::from_millis(2_000));
        let mut store = ToastStore::new(config);
        let mut now = Instant::now();

        let mut accepted = Vec::new();
        let mut shown = HashSet::new();
        let mut hidden = HashSet::new();

        for op in &ops {
            match op {
                Op::Push(k, m) => {
                    if let Some(id) = store.push(Toast::new(kind(*k), format!("m{m}")), now) {
                        accepted.push(id);
                    }
                }
                Op::Persistent(m) => {
                    let toast = Toast::new(ToastKind::Info, format!("p{m}")).persistent();
                    if let Some(id) = store.push(toast, now) {
                        accepted.push(id);
                    }
                }
                Op::Dismiss(idx) => {
                    if let Some(id) = accepted.get(*idx) {
                        store.dismiss(*id);
                    }
                }
                Op::DismissAll => store.dismiss_all(),
                Op::Tick(ms) => {
                    now += Duration::from_millis(*ms);
                    for action in store.tick(now) {
                        match action {
                            ToastAction::Show(id) => {
                                prop_assert!(shown.insert(id), "shown twice");
                            }
                            ToastAction::Hide(id) => {
                                prop_assert!(shown.contains(&id), "hidden before shown");
                                prop_assert!(hidden.insert(id), "hidden twice");
                            }
                        }
                    }
                }
            }
            prop_assert!(store.visible_count() <= max_visible);
            prop_assert!(store.pending_count() <= max_queued);
        }

        let stats = store.stats();
        prop_assert_eq!(
            stats.total_pushed,
            accepted.len() as u64 + stats.dedup_count + stats.overflow_count
        );
    }
}
