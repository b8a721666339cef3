//! Test utilities for CLI crate integration tests.
#![allow(dead_code)]

use std::convert::Infallible;
use std::time::Duration;

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Response, Server, StatusCode};
use tokio::task;

/// Start an in-process HTTP server on an ephemeral port that answers every
/// request with `status`, and return the port.
pub async fn start_http_server(status: StatusCode) -> u16 {
    let make_svc = make_service_fn(move |_conn| async move {
        Ok::<_, Infallible>(service_fn(move |_req| async move {
            let response = Response::builder()
                .status(status)
                .body(Body::from(""))
                .unwrap();
            Ok::<_, Infallible>(response)
        }))
    });

    let addr = ([127, 0, 0, 1], 0).into();
    let server = Server::bind(&addr).serve(make_svc);
    let port = server.local_addr().port();

    task::spawn(async move {
        if let Err(e) = server.await {
            eprintln!("test server error: {}", e);
        }
    });

    // Give the server a moment to start
    tokio::time::sleep(Duration::from_millis(10)).await;
    port
}

/// Run the given future with a timeout, failing the test if it elapses.
///
/// # Panics
///
/// Panics if the timeout elapses before the future completes.
pub async fn run_with_timeout<F, T>(duration: Duration, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(duration, fut)
        .await
        .expect("test timed out")
}
