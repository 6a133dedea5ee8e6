#![forbid(unsafe_code)]

//! End-to-end presenter scenarios: stacked kinds, confirm slot, expiration,
//! and gesture-driven dismissal wired together the way a host UI layer
//! drives them.

use lkit_core::{
    Action, DismissDirection, DismissalScroll, DragSample, EntryId, EntryMetadata,
    ExpirationPolicy, Modality, OutTapBehavior, SwipeDismiss,
};
use lkit_presenter::{ConfirmPresenter, ConfirmTheme, PresenterConfig, StackPresenter};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use web_time::Instant;

fn id(raw: u64) -> EntryId {
    EntryId::from_raw(raw)
}

#[test]
fn stacking_order_and_top() {
    let mut presenter: StackPresenter<&str> = StackPresenter::new();
    presenter.present(id(1), EntryMetadata::default(), "one");
    presenter.present(id(2), EntryMetadata::default(), "two");
    presenter.present(id(3), EntryMetadata::default(), "three");

    let depths: Vec<_> = presenter.entries().iter().map(|e| e.depth()).collect();
    assert_eq!(depths, vec![0, 1, 2]);
    assert!(presenter.is_top(id(3)));
    assert!(presenter.contains(id(1)));
}

#[test]
fn middle_dismissal_does_not_touch_top_timer() {
    let mut presenter: StackPresenter<&str> = StackPresenter::new();
    presenter.present(id(1), EntryMetadata::default(), "one");
    presenter.present(id(2), EntryMetadata::default(), "two");
    presenter.present(
        id(3),
        EntryMetadata::notification(ExpirationPolicy::Timeout(Duration::from_secs(3))),
        "three",
    );

    presenter.dismiss(id(2));

    let depths: Vec<_> = presenter.entries().iter().map(|e| e.depth()).collect();
    assert_eq!(depths, vec![0, 1]);
    assert_eq!(presenter.top_id(), Some(id(3)));
    assert_eq!(presenter.expiration_owner(), Some(id(3)));
}

#[test]
fn pop_last_promotes_and_rearms() {
    let mut presenter: StackPresenter<&str> = StackPresenter::new();
    presenter.present(
        id(1),
        EntryMetadata::notification(ExpirationPolicy::Timeout(Duration::from_secs(5))),
        "one",
    );
    presenter.present(
        id(2),
        EntryMetadata::notification(ExpirationPolicy::Timeout(Duration::from_secs(3))),
        "two",
    );

    presenter.pop_last();

    assert_eq!(presenter.top_id(), Some(id(1)));
    assert_eq!(presenter.expiration_owner(), Some(id(1)));

    // The promoted entry's own five-second countdown runs to completion.
    let fired = presenter.tick(Instant::now() + Duration::from_secs(6));
    assert_eq!(fired, Some(id(1)));
    assert!(presenter.is_empty());
}

#[test]
fn double_present_reverts_caller_intent() {
    let mut presenter: StackPresenter<&str> = StackPresenter::new();

    // The call-site pattern: a bound `is_presented` flag that snaps back to
    // false when the engine rejects the present.
    let is_presented = Cell::new(false);

    is_presented.set(true);
    if presenter.present(id(9), EntryMetadata::default(), "x").is_none() {
        is_presented.set(false);
    }
    assert!(is_presented.get());

    // Re-triggered before dismissal: rejected, flag reverted.
    is_presented.set(true);
    if presenter.present(id(9), EntryMetadata::default(), "x").is_none() {
        is_presented.set(false);
    }
    assert!(!is_presented.get());
    assert_eq!(presenter.len(), 1);
}

#[test]
fn confirm_slot_lifecycle() {
    let mut confirm: ConfirmPresenter<&str> = ConfirmPresenter::new();

    assert!(confirm.present("first", ConfirmTheme::default(), vec![Action::cancel("A")]));
    assert!(!confirm.present("second", ConfirmTheme::default(), vec![]));

    confirm.dismiss();
    assert!(confirm.present("third", ConfirmTheme::default(), vec![]));
}

#[test]
fn swipe_commit_pops_exactly_once() {
    let mut presenter: StackPresenter<&str> = StackPresenter::new();
    presenter.present(id(1), EntryMetadata::default(), "sheet");

    let mut swipe = SwipeDismiss::new(DismissDirection::TopToBottom, 300.0);

    // Below threshold: no commit.
    assert!(!swipe.drag_changed(DragSample::new(80.0, 200.0)));
    assert_eq!(presenter.len(), 1);

    // Past threshold: commit once, then the gesture keeps sampling.
    for sample in [
        DragSample::new(150.0, 350.0),
        DragSample::new(200.0, 420.0),
        DragSample::new(260.0, 500.0),
    ] {
        if swipe.drag_changed(sample) {
            presenter.pop_last();
        }
    }
    swipe.drag_ended();

    assert!(presenter.is_empty(), "exactly one pop for the whole gesture");
}

#[test]
fn noninteractive_modal_suppresses_gesture() {
    let metadata = EntryMetadata::fullscreen(
        lkit_core::Edges::empty(),
        DismissalScroll::Dismiss {
            predicted_threshold: 500.0,
        },
    )
    .modality(Modality::Modal(lkit_core::Interactivity::Noninteractive));

    // The host only builds a gesture path for entries that allow it.
    assert!(!metadata.allows_interactive_dismiss());
}

#[test]
fn out_tap_policy_drives_popup_dismissal() {
    let mut popups: StackPresenter<&str> = StackPresenter::new();
    popups.present(
        id(1),
        EntryMetadata::popup(lkit_core::Edges::empty(), OutTapBehavior::None),
        "sticky",
    );
    popups.present(
        id(2),
        EntryMetadata::popup(lkit_core::Edges::empty(), OutTapBehavior::Dismiss),
        "tappable",
    );

    // Backdrop tap removes the top popup, then the sticky one ignores taps.
    assert!(popups.handle_out_tap());
    assert_eq!(popups.top_id(), Some(id(1)));
    assert!(!popups.handle_out_tap());
    assert_eq!(popups.len(), 1);
}

#[test]
fn render_observer_sees_every_committed_state() {
    let mut presenter: StackPresenter<&str> = StackPresenter::with_config(
        PresenterConfig::new().verbose(true),
    );
    let states: Rc<RefCell<Vec<Vec<u64>>>> = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&states);
    let _sub = presenter.subscribe(move |stack| {
        s.borrow_mut()
            .push(stack.iter().map(|e| e.id().raw()).collect());
    });

    presenter.present(id(1), EntryMetadata::default(), "a");
    presenter.present(id(2), EntryMetadata::default(), "b");
    presenter.dismiss(id(1));
    presenter.pop_to_root();

    assert_eq!(
        *states.borrow(),
        vec![vec![1], vec![1, 2], vec![2], vec![]],
    );
}

#[test]
fn verbose_logging_is_harmless_under_a_subscriber() {
    let mut presenter: StackPresenter<&str> =
        StackPresenter::with_config(PresenterConfig::new().verbose(true));

    tracing::subscriber::with_default(tracing_subscriber::registry(), || {
        presenter.present(id(41), EntryMetadata::default(), "a");
        presenter.present(id(41), EntryMetadata::default(), "dup");
        presenter.dismiss(id(99));
        presenter.pop_to_root();
    });

    assert!(presenter.is_empty());
}

#[test]
fn expiration_cascade_over_ticks() {
    let mut presenter: StackPresenter<&str> = StackPresenter::new();
    let start = Instant::now();

    presenter.present(
        id(1),
        EntryMetadata::notification(ExpirationPolicy::Timeout(Duration::from_secs(5))),
        "slow",
    );
    presenter.present(
        id(2),
        EntryMetadata::notification(ExpirationPolicy::Timeout(Duration::from_secs(2))),
        "fast",
    );

    // Host loop ticking once a second.
    let mut auto_dismissed = Vec::new();
    for second in 1..=12 {
        if let Some(fired) = presenter.tick(start + Duration::from_secs(second)) {
            auto_dismissed.push(fired.raw());
        }
    }

    assert_eq!(auto_dismissed, vec![2, 1]);
    assert!(presenter.is_empty());
    assert_eq!(presenter.expiration_owner(), None);
}
