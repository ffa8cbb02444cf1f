#[cfg(test)]
mod test {
    use std::time::Duration;

    use httpmock::prelude::*;

    use crate::error::GatewayError;
    use crate::tests::common::{provider, token_issued_ago, token_response_json};

    #[tokio::test]
    async fn cold_cache_fetches_exactly_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(200).json_body(token_response_json("tok-1", 3600));
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        assert_eq!(provider.get_access_token().await.unwrap(), "tok-1");
        assert_eq!(provider.get_access_token().await.unwrap(), "tok-1");
        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn already_expired_response_refetches_every_call() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(200).json_body(token_response_json("tok-x", -100));
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        // each call stores an immediately-expired token, so the next one fetches again
        assert_eq!(provider.get_access_token().await.unwrap(), "tok-x");
        assert_eq!(provider.get_access_token().await.unwrap(), "tok-x");
        assert_eq!(mock.hits_async().await, 2);
    }

    #[tokio::test]
    async fn force_refresh_always_fetches() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(200).json_body(token_response_json("tok-1", 3600));
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        provider.get_access_token().await.unwrap();
        provider.force_refresh().await.unwrap();
        assert_eq!(mock.hits_async().await, 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_serving_aging_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(500).body("upstream outage");
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        // 60s of a 100s lifetime consumed: past the 50% threshold, not expired
        provider.install_token(token_issued_ago("old-tok", 60, 100)).await;

        assert!(provider.should_refresh().await);
        assert_eq!(provider.get_access_token().await.unwrap(), "old-tok");
        assert_eq!(mock.hits_async().await, 1);

        // the explicit path still surfaces the failure
        let err = provider.force_refresh().await.expect_err("fetch fails");
        assert!(matches!(err, GatewayError::Authentication(_)));

        // slot untouched by the failed attempts
        let current = provider.current_token().await.expect("token kept");
        assert_eq!(current.value, "old-tok");
        assert!(!current.is_expired());
    }

    #[tokio::test]
    async fn failed_refresh_on_cold_cache_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(500);
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        let err = provider.get_access_token().await.expect_err("no token to fall back to");
        assert!(matches!(err, GatewayError::Authentication(_)));
        assert!(provider.current_token().await.is_none());
    }

    #[tokio::test]
    async fn failed_refresh_of_expired_token_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(500);
            })
            .await;

        let provider = provider(&server.base_url(), 50);
        provider.install_token(token_issued_ago("dead-tok", 200, 100)).await;

        let err = provider.get_access_token().await.expect_err("expired, nothing usable");
        assert!(matches!(err, GatewayError::Authentication(_)));

        // the expired token is superseded only by a successful renewal
        let current = provider.current_token().await.expect("slot untouched");
        assert_eq!(current.value, "dead-tok");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_share_one_fetch() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/token");
                then.status(200)
                    .delay(Duration::from_millis(100))
                    .json_body(token_response_json("tok-1", 3600));
            })
            .await;

        let provider = provider(&server.base_url(), 50);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let provider = provider.clone();
            handles.push(tokio::spawn(
                async move { provider.get_access_token().await },
            ));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "tok-1");
        }

        assert_eq!(mock.hits_async().await, 1, "exactly one fetch in flight");
    }
}
