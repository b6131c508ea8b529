//! Tests that run regardless of the tracing feature

use crate::common::{tokio_or, triggers};

#[tokio::test]
async fn test_works_without_subscriber() {
    let or = tokio_or();
    let (mut triggers, inputs) = triggers(7);

    let derived = or.wait_for_first(inputs);
    triggers.remove(3).fire();
    derived.await;
}
