//! Frame clock for animated stat values.

use contracts::shared::metric_value::MetricValue;
use contracts::shared::projector::Projection;
use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Signal that walks from the projection's start value to its target.
///
/// The interval ticks every `frame_ms` and stops itself once the target is
/// shown. It is also dropped when the owning component unmounts.
pub fn use_projected_value(projection: Projection) -> ReadSignal<MetricValue> {
    let started = now_ms();
    let (value, set_value) = signal(projection.value_at(0.0));

    if projection.is_finished(0.0) {
        set_value.set(projection.target());
        return value;
    }

    let ticker = StoredValue::new_local(None::<Interval>);
    let frame_ms = projection.spec().frame_ms.max(1);
    let interval = Interval::new(frame_ms, move || {
        let elapsed = now_ms() - started;
        set_value.set(projection.value_at(elapsed));
        if projection.is_finished(elapsed) {
            // The interval cannot drop itself mid-tick; release it on the next turn.
            Timeout::new(0, move || {
                ticker.try_update_value(|t| *t = None);
            })
            .forget();
        }
    });
    ticker.set_value(Some(interval));

    on_cleanup(move || {
        ticker.try_update_value(|t| *t = None);
    });

    value
}
