/// Win count as a whole-number percentage of all decided predictions.
///
/// Rounds half up, so 1 win / 1 loss is 50 and 1 win / 7 losses is 13.
/// An influencer with no decided predictions has 0% accuracy.
pub fn accuracy(wins: u32, losses: u32) -> u8 {
    let wins = u64::from(wins);
    let total = wins + u64::from(losses);
    if total == 0 {
        return 0;
    }

    // round(100 * w / t) == floor((200 * w + t) / (2 * t))
    let pct = (200 * wins + total) / (2 * total);

    // wins <= total, so pct <= 100
    pct as u8
}
