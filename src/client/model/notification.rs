//! Notification feed state with an optimistic mark-all-read.

use dioxus::prelude::*;

use crate::{
    client::model::error::ApiError,
    model::notification::{NotificationDto, NotificationKind, NotificationListDto},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Violation,
    DailyReport,
    SystemUpdate,
}

impl NotificationFilter {
    pub const ALL: [NotificationFilter; 5] = [
        NotificationFilter::All,
        NotificationFilter::Unread,
        NotificationFilter::Violation,
        NotificationFilter::DailyReport,
        NotificationFilter::SystemUpdate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationFilter::All => "All",
            NotificationFilter::Unread => "Unread",
            NotificationFilter::Violation => "Violations",
            NotificationFilter::DailyReport => "Reports",
            NotificationFilter::SystemUpdate => "Updates",
        }
    }

    pub fn matches(&self, notification: &NotificationDto) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
            NotificationFilter::Violation => notification.kind == NotificationKind::Violation,
            NotificationFilter::DailyReport => notification.kind == NotificationKind::DailyReport,
            NotificationFilter::SystemUpdate => {
                notification.kind == NotificationKind::SystemUpdate
            }
        }
    }
}

/// Local copy of the feed. Holds the snapshot taken before a speculative
/// mark-all-read so it can be rolled back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationFeed {
    list: NotificationListDto,
    snapshot: Option<NotificationListDto>,
}

impl NotificationFeed {
    pub fn new(list: NotificationListDto) -> Self {
        Self {
            list,
            snapshot: None,
        }
    }

    pub fn notifications(&self) -> &[NotificationDto] {
        &self.list.notifications
    }

    pub fn unread_count(&self) -> u64 {
        self.list.unread_count
    }

    pub fn filtered(&self, filter: NotificationFilter) -> Vec<NotificationDto> {
        self.list
            .notifications
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect()
    }

    pub fn is_pending(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Replaces the feed with freshly fetched data. Ignored while a
    /// mark-all-read is in flight so a poll cannot undo the optimistic state.
    pub fn replace(&mut self, list: NotificationListDto) {
        if self.snapshot.is_none() {
            self.list = list;
        }
    }

    /// Phase one: snapshot, then mark everything read with zero unread.
    /// Returns `false` if there is nothing to do or a mark is already pending.
    pub fn begin_mark_all_read(&mut self) -> bool {
        let nothing_unread =
            self.list.unread_count == 0 && self.list.notifications.iter().all(|n| n.read);
        if self.snapshot.is_some() || nothing_unread {
            return false;
        }

        self.snapshot = Some(self.list.clone());
        for notification in &mut self.list.notifications {
            notification.read = true;
        }
        self.list.unread_count = 0;
        true
    }

    /// Phase two: keep the change on success, restore the snapshot on failure.
    pub fn settle_mark_all_read(&mut self, success: bool) {
        if let Some(snapshot) = self.snapshot.take() {
            if !success {
                self.list = snapshot;
            }
        }
    }
}

/// The one feed shared by the navbar bell and the notification center,
/// provided at the app root.
#[derive(Clone, Copy, PartialEq)]
pub struct NotificationStore {
    feed: Signal<Option<NotificationFeed>>,
    error: Signal<Option<ApiError>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            feed: Signal::new(None),
            error: Signal::new(None),
        }
    }

    pub fn feed(&self) -> Option<NotificationFeed> {
        self.feed.read().clone()
    }

    /// Last fetch failure, cleared by the next successful fetch.
    pub fn error(&self) -> Option<ApiError> {
        self.error.read().clone()
    }

    pub fn unread_count(&self) -> u64 {
        self.feed
            .read()
            .as_ref()
            .map(NotificationFeed::unread_count)
            .unwrap_or(0)
    }

    /// Applies a fetch result. A failure keeps whatever was shown before.
    pub fn load(&mut self, result: Result<NotificationListDto, ApiError>) {
        match result {
            Ok(list) => {
                let mut feed = self.feed.write();
                match feed.as_mut() {
                    Some(existing) => existing.replace(list),
                    None => *feed = Some(NotificationFeed::new(list)),
                }
                self.error.set(None);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn begin_mark_all_read(&mut self) -> bool {
        self.feed
            .write()
            .as_mut()
            .map(NotificationFeed::begin_mark_all_read)
            .unwrap_or(false)
    }

    pub fn settle_mark_all_read(&mut self, success: bool) {
        if let Some(feed) = self.feed.write().as_mut() {
            feed.settle_mark_all_read(success);
        }
    }

    /// Forgets the feed, e.g. when the signed-in user goes away.
    pub fn clear(&mut self) {
        self.feed.set(None);
        self.error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, kind: NotificationKind, read: bool) -> NotificationDto {
        NotificationDto {
            id: id.to_string(),
            kind,
            message: format!("message {}", id),
            read,
            ..Default::default()
        }
    }

    fn feed() -> NotificationFeed {
        NotificationFeed::new(NotificationListDto {
            notifications: vec![
                notification("1", NotificationKind::Violation, false),
                notification("2", NotificationKind::DailyReport, true),
                notification("3", NotificationKind::SystemUpdate, false),
            ],
            unread_count: 2,
        })
    }

    #[test]
    fn mark_all_read_is_immediate() {
        let mut feed = feed();

        assert!(feed.begin_mark_all_read());

        assert_eq!(feed.unread_count(), 0);
        assert!(feed.notifications().iter().all(|n| n.read));
        assert!(feed.is_pending());

        feed.settle_mark_all_read(true);
        assert!(!feed.is_pending());
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn failed_mark_all_read_rolls_back() {
        let mut feed = feed();
        let before = feed.clone();

        feed.begin_mark_all_read();
        feed.settle_mark_all_read(false);

        assert_eq!(feed, before);
    }

    #[test]
    fn poll_does_not_override_pending_mark() {
        let mut feed = feed();
        let stale = feed.list.clone();

        feed.begin_mark_all_read();
        feed.replace(stale);

        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn filters() {
        let feed = feed();

        assert_eq!(feed.filtered(NotificationFilter::All).len(), 3);
        assert_eq!(feed.filtered(NotificationFilter::Unread).len(), 2);
        assert_eq!(feed.filtered(NotificationFilter::DailyReport)[0].id, "2");
    }

    mod shared {
        use std::cell::Cell;

        use dioxus::dioxus_core::NoOpMutations;

        use dioxus::prelude::*;

        use super::*;

        thread_local! {
            static STORE: Cell<Option<NotificationStore>> = const { Cell::new(None) };
            static BADGE: Cell<u64> = const { Cell::new(u64::MAX) };
        }

        #[component]
        fn Badge() -> Element {
            let store = use_context::<NotificationStore>();
            BADGE.with(|badge| badge.set(store.unread_count()));
            rsx! {}
        }

        fn app() -> Element {
            let store = use_context_provider(NotificationStore::new);
            use_hook(|| STORE.with(|cell| cell.set(Some(store))));
            rsx! { Badge {} }
        }

        fn list() -> NotificationListDto {
            NotificationListDto {
                notifications: vec![notification("1", NotificationKind::Violation, false)],
                unread_count: 1,
            }
        }

        fn mount() -> (VirtualDom, NotificationStore) {
            let mut dom = VirtualDom::new(app);
            dom.rebuild_in_place();
            let store = STORE.with(Cell::get).unwrap();
            (dom, store)
        }

        fn badge() -> u64 {
            BADGE.with(Cell::get)
        }

        /// Tests the badge while a mark-all-read started elsewhere is in flight.
        ///
        /// Expected: Badge drops to zero before the call settles, and comes
        /// back after a failure
        #[test]
        fn badge_follows_optimistic_mark_all_read() {
            let (mut dom, mut store) = mount();

            dom.in_runtime(|| store.load(Ok(list())));
            dom.render_immediate(&mut NoOpMutations);
            assert_eq!(badge(), 1);

            dom.in_runtime(|| assert!(store.begin_mark_all_read()));
            dom.render_immediate(&mut NoOpMutations);
            assert_eq!(badge(), 0);

            dom.in_runtime(|| store.settle_mark_all_read(false));
            dom.render_immediate(&mut NoOpMutations);
            assert_eq!(badge(), 1);
        }

        /// Tests a failed refresh after a successful one.
        ///
        /// Expected: Previous feed kept and the error reported
        #[test]
        fn failed_refresh_keeps_feed() {
            let (dom, mut store) = mount();

            dom.in_runtime(|| {
                store.load(Ok(list()));
                store.load(Err(ApiError::new(500, "boom")));

                assert_eq!(store.unread_count(), 1);
                assert_eq!(store.error().map(|e| e.status), Some(500));

                store.load(Ok(list()));
                assert!(store.error().is_none());
            });
        }
    }
}
