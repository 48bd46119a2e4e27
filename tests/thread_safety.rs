mod common;

use bunner_origin_gate_rs::{FetchSite, GateDecision, OriginGate};
use common::builders::post;
use std::sync::Arc;
use std::thread;

#[test]
fn gate_can_be_shared_across_threads() {
    let origins: Vec<String> = (0..8).map(|i| format!("https://thread{i}.example")).collect();
    let gate = Arc::new(
        common::builders::gate()
            .allowed_origins(origins.clone())
            .allowed_fetch_sites([FetchSite::SameOrigin, FetchSite::SameSite])
            .build(),
    );

    let mut handles = Vec::new();
    for (i, origin) in origins.into_iter().enumerate() {
        let gate = Arc::clone(&gate);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let allowed = post()
                    .origin(origin.as_str())
                    .sec_fetch_site("same-site")
                    .evaluate(&gate);
                assert_eq!(allowed, GateDecision::Allowed);

                let rejected = post()
                    .origin(format!("https://intruder{i}.example"))
                    .sec_fetch_site("same-site")
                    .evaluate(&gate);
                assert!(rejected.is_rejected());
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}

#[test]
fn gate_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<OriginGate>();
}
