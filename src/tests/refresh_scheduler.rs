#[cfg(test)]
mod test {
    use std::time::Duration;

    use httpmock::prelude::*;

    use crate::auth::scheduler::{run_tick, spawn_refresh_loop};
    use crate::tests::common::{provider, token_issued_ago, token_response_json};

    #[tokio::test]
    async fn tick_skips_fetch_while_token_fresh() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(200).json_body(token_response_json("tok-1", 3600));
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        provider.install_token(token_issued_ago("fresh-tok", 0, 3600)).await;

        run_tick(&provider).await;
        assert_eq!(mock.hits_async().await, 0);
        assert_eq!(provider.current_token().await.unwrap().value, "fresh-tok");
    }

    #[tokio::test]
    async fn tick_renews_aging_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(200).json_body(token_response_json("tok-2", 3600));
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        provider.install_token(token_issued_ago("old-tok", 60, 100)).await;

        run_tick(&provider).await;
        assert_eq!(mock.hits_async().await, 1);
        assert_eq!(provider.current_token().await.unwrap().value, "tok-2");
    }

    #[tokio::test]
    async fn tick_swallows_fetch_errors_and_retries_next_tick() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(500).body("outage");
            })
            .await;

        let provider = provider(&server.base_url(), 50);

        // neither tick panics or aborts; each one retries the fetch
        run_tick(&provider).await;
        run_tick(&provider).await;

        assert_eq!(mock.hits_async().await, 2);
        assert!(provider.current_token().await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn refresh_loop_obtains_token_at_startup() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(200).json_body(token_response_json("tok-loop", 3600));
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        let handle = spawn_refresh_loop(provider.clone(), 50);

        // first tick fires immediately; give the loop a moment to run it
        tokio::time::sleep(Duration::from_millis(300)).await;
        handle.abort();

        assert!(mock.hits_async().await >= 1);
        assert_eq!(provider.current_token().await.unwrap().value, "tok-loop");
    }
}
