#![forbid(unsafe_code)]

//! LayerKit: a presentation-stack toolkit for layered overlay UI.
//!
//! Re-exports the entity/policy layer (`lkit-core`) and the stateful
//! presenters (`lkit-presenter`). Most applications can simply
//! `use layerkit::prelude::*`.

pub use lkit_core::{
    Action, ActionId, ActionRole, Anchor, AnimationSpec, DismissDirection, DismissalScroll,
    DragSample, Edges, EntryId, EntryMetadata, ExpirationPolicy, Insets, Interactivity,
    LayerTransform, Modality, OutTapBehavior, SegregatedActions, StackEntry, SwipeDismiss,
    segregate, stacked_transform, top_sheet_offset,
};
pub use lkit_presenter::{
    ActionFonts, ConfirmEntry, ConfirmPresenter, ConfirmTheme, CoverPresenter, EntryTimer,
    FontSpec, FontWeight, FullscreenPresenter, NotificationPresenter, PopupPresenter,
    PresenterConfig, StackPresenter, SubscriberSet, Subscription, Tint,
};

/// Common imports for applications embedding LayerKit.
pub mod prelude {
    pub use lkit_core::{
        Action, ActionRole, Anchor, AnimationSpec, DismissDirection, DismissalScroll, DragSample,
        Edges, EntryId, EntryMetadata, ExpirationPolicy, Insets, Interactivity, Modality,
        OutTapBehavior, SwipeDismiss, stacked_transform,
    };
    pub use lkit_presenter::{
        ConfirmPresenter, ConfirmTheme, CoverPresenter, FullscreenPresenter,
        NotificationPresenter, PopupPresenter, PresenterConfig, StackPresenter,
    };
    pub use std::time::Duration;
    pub use web_time::Instant;
}
