use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        constant::POLL_INTERVAL_MS,
        model::{
            error::ApiError,
            notification::NotificationStore,
            query::{QueryClient, QueryKey},
            selection::SelectedServer,
            session::with_placeholders,
        },
    },
    model::server::ServerSummaryDto,
};

/// Calls `tick` every `interval_ms` while the calling component is mounted.
pub fn use_polling(interval_ms: u32, tick: impl FnMut() + Clone + 'static) {
    use_future(move || {
        #[allow(unused_mut)]
        let mut tick = tick.clone();
        async move {
            #[cfg(feature = "web")]
            loop {
                gloo_timers::future::TimeoutFuture::new(interval_ms).await;
                tick();
            }

            #[cfg(not(feature = "web"))]
            let _ = (interval_ms, &mut tick);
        }
    });
}

/// Clears `message` once `after_ms` has elapsed, unless it was replaced in the
/// meantime.
pub fn dismiss_later<T: Clone + PartialEq + 'static>(mut message: Signal<Option<T>>, after_ms: u32) {
    let shown = message.peek().clone();
    spawn(async move {
        #[cfg(feature = "web")]
        gloo_timers::future::TimeoutFuture::new(after_ms).await;

        #[cfg(not(feature = "web"))]
        let _ = after_ms;

        if *message.peek() == shown {
            message.set(None);
        }
    });
}

/// Last successful value of `resource`. Stays in place while a refetch is in
/// flight and after one fails.
pub fn use_last_success<T: Clone + 'static>(
    resource: Resource<Result<T, ApiError>>,
) -> Signal<Option<T>> {
    let mut last = use_signal(|| None::<T>);
    use_effect(move || {
        if let Some(Ok(value)) = &*resource.read() {
            last.set(Some(value.clone()));
        }
    });
    last
}

/// Servers the user can manage, refetched whenever `QueryKey::Servers` is
/// invalidated. Keeps the shared `SelectedServer` pointing at a listed server.
pub fn use_server_list() -> Resource<Result<Vec<ServerSummaryDto>, ApiError>> {
    let api = use_context::<ApiClient>();
    let queries = use_context::<QueryClient>();
    let mut selected = use_context::<SelectedServer>();

    let servers = use_resource(move || {
        let api = api.clone();
        let _ = queries.version(&QueryKey::Servers);
        async move {
            api.get_servers().await.map(|list| {
                list.servers
                    .into_iter()
                    .map(with_placeholders)
                    .collect::<Vec<_>>()
            })
        }
    });

    use_effect(move || {
        if let Some(Ok(list)) = &*servers.read() {
            selected.sync(list);
        }
    });

    servers
}

/// Keeps the shared `NotificationStore` filled: fetches on mount and on every
/// `QueryKey::Notifications` invalidation, and invalidates that key every
/// poll interval. Mounted once, by the navbar bell.
pub fn use_notification_sync() {
    let api = use_context::<ApiClient>();
    let mut queries = use_context::<QueryClient>();
    let mut store = use_context::<NotificationStore>();

    let fetched = use_resource(move || {
        let api = api.clone();
        let _ = queries.version(&QueryKey::Notifications);
        async move { api.get_user_notifications().await }
    });

    use_effect(move || {
        if let Some(result) = &*fetched.read() {
            store.load(result.clone());
        }
    });

    use_polling(POLL_INTERVAL_MS, move || {
        queries.invalidate(QueryKey::Notifications)
    });

    use_drop(move || store.clear());
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    thread_local! {
        static OUTCOME: Cell<Option<Signal<Result<u32, ApiError>>>> = const { Cell::new(None) };
        static SHOWN: Cell<Option<u32>> = const { Cell::new(None) };
    }

    fn panel() -> Element {
        let outcome = use_signal(|| Ok::<u32, ApiError>(1));
        use_hook(|| OUTCOME.with(|cell| cell.set(Some(outcome))));

        let fetched = use_resource(move || {
            let result = outcome();
            async move { result }
        });
        let last = use_last_success(fetched);
        SHOWN.with(|shown| shown.set(last()));

        rsx! {}
    }

    fn settle(dom: &mut VirtualDom) {
        for _ in 0..6 {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn shown() -> Option<u32> {
        SHOWN.with(Cell::get)
    }

    /// Tests a refetch that fails after a successful load.
    ///
    /// Expected: The earlier value stays shown until the next success
    #[test]
    fn failed_refetch_keeps_last_value() {
        let mut dom = VirtualDom::new(panel);
        dom.rebuild_in_place();
        settle(&mut dom);
        assert_eq!(shown(), Some(1));

        let mut outcome = OUTCOME.with(Cell::get).unwrap();
        dom.in_runtime(|| outcome.set(Err(ApiError::new(500, "down"))));
        settle(&mut dom);
        assert_eq!(shown(), Some(1));

        dom.in_runtime(|| outcome.set(Ok(2)));
        settle(&mut dom);
        assert_eq!(shown(), Some(2));
    }
}
