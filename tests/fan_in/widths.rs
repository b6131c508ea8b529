//! Every valid fan-in width gives the same observable behavior

use std::time::Duration;

use test_case::test_case;
use tokio::time::Instant;

use crate::common::{sleep_signal, tokio_or, triggers, wait_idle};
use orchan::OrError;

#[test_case(2 ; "binary")]
#[test_case(3 ; "default")]
#[test_case(4 ; "quaternary")]
#[test_case(16 ; "wide")]
#[tokio::test(start_paused = true)]
async fn test_width_does_not_change_firing_time(width: usize) {
    let or = tokio_or().with_fan_in(width).unwrap();
    let secs = [40, 12, 33, 7, 90, 21, 15, 64, 8, 30];

    let start = Instant::now();
    or.wait_for_first(
        secs.iter()
            .map(|&s| sleep_signal(Duration::from_secs(s))),
    )
    .await;
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_secs(7));
    assert!(elapsed < Duration::from_secs(8));
}

#[test_case(2 ; "binary")]
#[test_case(3 ; "default")]
#[test_case(7 ; "odd")]
#[tokio::test]
async fn test_width_tears_down_whole_tree(width: usize) {
    let or = tokio_or().with_fan_in(width).unwrap();
    let (mut triggers, inputs) = triggers(25);

    let derived = or.wait_for_first(inputs);
    triggers.remove(0).fire();
    derived.await;

    assert!(wait_idle(&or, Duration::from_secs(5)).await);
}

#[test_case(0)]
#[test_case(1)]
fn test_degenerate_widths_rejected(width: usize) {
    let err = orchan::OrChannel::new(|_fut| {})
        .with_fan_in(width)
        .unwrap_err();

    assert_eq!(err, OrError::InvalidFanIn { width });
    assert!(err.to_string().contains(&format!("width {}", width)));
}

#[test]
fn test_fan_in_error_propagates_with_question_mark() {
    fn build(width: usize) -> orchan::OrResult<orchan::OrChannel> {
        let or = orchan::OrChannel::new(|_fut| {}).with_fan_in(width)?;
        Ok(or)
    }

    assert!(build(2).is_ok());
    assert!(build(1).is_err());
}
