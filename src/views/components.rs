use crate::models::{Direction, Influencer, Prediction, PredictionResult};

use super::{escape, format_event_date, initials, safe_url};

/// Trend shown on an influencer card: accuracy of 50% or better reads bullish.
pub fn accuracy_trend(accuracy: u8) -> Direction {
    if accuracy >= 50 {
        Direction::Bullish
    } else {
        Direction::Bearish
    }
}

/// Trend shown on a spotlight card: bullish only when the latest call is.
pub fn latest_trend(recent: &[Prediction]) -> Direction {
    match recent.first().map(|p| &p.direction) {
        Some(Direction::Bullish) => Direction::Bullish,
        _ => Direction::Bearish,
    }
}

pub fn result_label(result: Option<&PredictionResult>) -> &'static str {
    match result {
        Some(PredictionResult::Correct) => "Correct",
        Some(PredictionResult::Incorrect) => "Incorrect",
        _ => "Pending",
    }
}

fn direction_class(direction: &Direction) -> &'static str {
    match direction {
        Direction::Bullish => "bullish",
        Direction::Bearish => "bearish",
        _ => "neutral",
    }
}

fn result_class(result: Option<&PredictionResult>) -> &'static str {
    match result {
        Some(PredictionResult::Correct) => "correct",
        Some(PredictionResult::Incorrect) => "incorrect",
        _ => "pending",
    }
}

fn direction_badge(direction: &Direction) -> String {
    format!(
        r#"<span class="badge {}">{}</span>"#,
        direction_class(direction),
        escape(direction.as_str())
    )
}

fn trend_dot(trend: &Direction, what: &str) -> String {
    let label = match trend {
        Direction::Bullish => "Bullish",
        _ => "Bearish",
    };
    format!(
        r#"<span class="dot {}" title="{label} {what}"></span>"#,
        direction_class(trend)
    )
}

fn profile_link(influencer: &Influencer) -> String {
    match safe_url(&influencer.social_media_url) {
        Some(href) => format!(
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer">View Social Profile</a>"#
        ),
        None => String::new(),
    }
}

pub fn influencer_card(influencer: &Influencer) -> String {
    let id = escape(&influencer.id);
    format!(
        r#"<div class="card stack">
  <div class="row">
    <a href="/influencer/{id}"><strong>{name}</strong></a>
    {dot}
  </div>
  <div class="row"><span class="muted">Accuracy</span><span>{accuracy}%</span></div>
  <div class="row"><span class="muted">Record</span><span>{wins}W - {losses}L</span></div>
  <div>{profile}</div>
</div>"#,
        name = escape(&influencer.name),
        dot = trend_dot(&accuracy_trend(influencer.accuracy), "prediction trend"),
        accuracy = influencer.accuracy,
        wins = influencer.win_count,
        losses = influencer.loss_count,
        profile = profile_link(influencer),
    )
}

pub fn influencer_summary(influencer: &Influencer) -> String {
    format!(
        r#"<div class="card row">
  <div>
    <h1>{name}</h1>
    {profile}
  </div>
  <div class="row">
    <div><p class="muted">Accuracy</p><p><strong>{accuracy}%</strong></p></div>
    <div><p class="muted">Record</p><p><strong><span class="correct">{wins}</span> / <span class="incorrect">{losses}</span></strong></p></div>
  </div>
</div>"#,
        name = escape(&influencer.name),
        profile = profile_link(influencer),
        accuracy = influencer.accuracy,
        wins = influencer.win_count,
        losses = influencer.loss_count,
    )
}

pub fn prediction_item(prediction: &Prediction) -> String {
    let mut cells = vec![
        format!(
            r#"<div><p class="muted">Event</p><p>{} <span class="muted">({})</span></p></div>"#,
            escape(prediction.event_type.as_str()),
            escape(&format_event_date(&prediction.event_date))
        ),
        format!(
            r#"<div><p class="muted">Pair</p><p>{}</p></div>"#,
            escape(prediction.pair.as_str())
        ),
        format!(
            r#"<div><p class="muted">Prediction</p>{}</div>"#,
            direction_badge(&prediction.direction)
        ),
        format!(
            r#"<div><p class="muted">Result</p><p class="{}">{}</p></div>"#,
            result_class(prediction.result.as_ref()),
            result_label(prediction.result.as_ref())
        ),
    ];

    if let Some(actual) = prediction.actual_direction.as_ref().filter(|_| !prediction.is_pending()) {
        cells.push(format!(
            r#"<div><p class="muted">Actual</p>{}</div>"#,
            direction_badge(actual)
        ));
    }

    if let Some(href) = prediction.post_url.as_deref().and_then(safe_url) {
        cells.push(format!(
            r#"<div><p class="muted">Source</p><a href="{href}" target="_blank" rel="noopener noreferrer">View Post</a></div>"#
        ));
    }

    if let Some(notes) = &prediction.notes {
        cells.push(format!(
            r#"<div><p class="muted">Notes</p><p>{}</p></div>"#,
            escape(notes)
        ));
    }

    format!(r#"<div class="card grid">{}</div>"#, cells.join(""))
}

pub fn spotlight_card(influencer: &Influencer, recent: &[Prediction]) -> String {
    let avatar = match influencer.avatar_url.as_deref().and_then(safe_url) {
        Some(src) => format!(
            r#"<img class="avatar" src="{src}" alt="{}">"#,
            escape(&influencer.name)
        ),
        None => format!(
            r#"<span class="avatar">{}</span>"#,
            escape(&initials(&influencer.name))
        ),
    };

    let description = influencer
        .description
        .as_ref()
        .map(|d| format!(r#"<p class="muted">{}</p>"#, escape(d)))
        .unwrap_or_default();

    let rows: String = recent
        .iter()
        .map(|p| {
            let result = p.result.as_ref();
            format!(
                r#"<div class="row"><span>{} <span class="muted">{}</span></span><span>{} <span class="badge {}">{}</span></span></div>"#,
                escape(p.event_type.as_str()),
                escape(&format_event_date(&p.event_date)),
                direction_badge(&p.direction),
                result_class(result),
                escape(result.map(|r| r.as_str()).unwrap_or("pending")),
            )
        })
        .collect();

    format!(
        r#"<div class="card stack">
  <div class="row">
    <div class="row">
      {avatar}
      <div>
        <strong>{name}</strong>
        <div><span class="badge">{accuracy}% Accuracy</span> <span class="badge">{total} Predictions</span></div>
      </div>
    </div>
    <div class="row"><span class="badge">Featured by OnlyPips</span>{dot}</div>
  </div>
  {description}
  <h4>Recent Predictions</h4>
  <div class="stack">{rows}</div>
  <div class="row">
    <a href="/influencer/{id}">View full prediction history</a>
    {profile}
  </div>
</div>"#,
        name = escape(&influencer.name),
        accuracy = influencer.accuracy,
        total = influencer.total_predictions(),
        dot = trend_dot(&latest_trend(recent), "latest prediction"),
        id = escape(&influencer.id),
        profile = profile_link(influencer),
    )
}
