use crate::config::DEFAULT_NUMBER_OF_DAYS;

/// Bucket index of `timestamp` within the span `first..=last` split into
/// `number_of_days` chunks.
///
/// Bucket `i` is bounded above by `first + i*chunk` and below by
/// `first + (i+1)*chunk`. For a positive chunk the lower bound overtakes the
/// upper one, so only a zero or negative chunk can ever match; everything
/// that matches no bucket lands in bucket 0. Bounds wrap on overflow.
pub fn recency_bucket(timestamp: i64, first: i64, last: i64, number_of_days: i64) -> i64 {
    let days = if number_of_days <= 0 {
        DEFAULT_NUMBER_OF_DAYS
    } else {
        number_of_days
    };

    let chunk = last.wrapping_sub(first) / days;
    // a zero chunk can only match bucket 0 and a positive one never matches,
    // so the result is 0 either way
    if chunk >= 0 {
        return 0;
    }

    for i in 0..days {
        let hi = first.wrapping_add(i.wrapping_mul(chunk));
        let lo = first.wrapping_add((i + 1).wrapping_mul(chunk));
        if hi >= timestamp && timestamp >= lo {
            return i;
        }
    }
    0
}
