use crate::models::{Influencer, Prediction};
use crate::records::{InfluencerListView, SortMode};
use crate::services::Theme;

use super::components::{influencer_card, influencer_summary, prediction_item, spotlight_card};
use super::layout;

pub const INFLUENCERS_LOAD_FAILED: &str = "Failed to load influencers. Please try again later.";
pub const INFLUENCER_LOAD_FAILED: &str = "Failed to load influencer data. Please try again later.";
pub const SPOTLIGHT_LOAD_FAILED: &str = "Error loading spotlighted traders. Please try again later.";

pub fn index_page(view: &InfluencerListView, theme: Theme, notice: Option<&str>) -> String {
    let sort_link = match view.mode() {
        SortMode::Natural => r#"<a class="button" href="/?sort=accuracy">Sort by Accuracy</a>"#,
        SortMode::Accuracy => r#"<a class="button" href="/">Reset Order</a>"#,
    };

    let listing = if view.is_empty() {
        r#"<div class="empty">No influencers found</div>"#.to_string()
    } else {
        let cards: String = view.influencers().iter().map(influencer_card).collect();
        format!(r#"<div class="grid">{cards}</div>"#)
    };

    let content = format!(
        r#"<section class="stack" style="text-align:center">
  <h1>Event Horizon</h1>
  <p class="muted">Tracking forex influencer predictions on high-impact news events like NFP, CPI, and FOMC. See who's consistently right and who's just making noise.</p>
</section>
<section class="stack">
  <div class="row"><h2>Forex Influencers</h2>{sort_link}</div>
  {listing}
</section>
<section class="stack" style="text-align:center">
  <h2>How It Works</h2>
  <p class="muted">We track what popular forex influencers predict before major economic events. After the event occurs, we record the actual outcome and calculate their accuracy.</p>
</section>"#
    );

    layout("Forex Influencers", theme, notice, &content)
}

pub fn influencer_page(
    influencer: &Influencer,
    predictions: &[Prediction],
    theme: Theme,
    notice: Option<&str>,
) -> String {
    let history = if predictions.is_empty() {
        r#"<div class="card empty">No predictions available</div>"#.to_string()
    } else {
        predictions.iter().map(prediction_item).collect()
    };

    let content = format!(
        r#"<a href="/">&larr; Back to all influencers</a>
<div class="stack">
  {summary}
  <h2>Prediction History</h2>
  <div class="stack">{history}</div>
</div>"#,
        summary = influencer_summary(influencer),
    );

    layout(&influencer.name, theme, notice, &content)
}

/// Shown for an unknown influencer id, and when the lookup itself failed.
pub fn influencer_not_found_page(theme: Theme, notice: Option<&str>) -> String {
    let content = r#"<div class="stack" style="text-align:center">
  <h1>Influencer Not Found</h1>
  <p><a class="button" href="/">Return to Home</a></p>
</div>"#;
    layout("Influencer Not Found", theme, notice, content)
}

pub fn spotlight_page(
    featured: &[(Influencer, Vec<Prediction>)],
    theme: Theme,
    load_failed: bool,
) -> String {
    let body = if load_failed {
        format!(r#"<div class="empty incorrect">{SPOTLIGHT_LOAD_FAILED}</div>"#)
    } else if featured.is_empty() {
        r#"<div class="empty">No spotlighted traders found.</div>"#.to_string()
    } else {
        featured
            .iter()
            .map(|(influencer, recent)| spotlight_card(influencer, recent))
            .collect()
    };

    let content = format!(
        r#"<div class="stack">
  <div style="text-align:center">
    <h1>Trader Spotlight</h1>
    <p class="muted">These are the traders catching eyes. Accuracy, consistency, and confidence. Spotlight is where OnlyPips highlights the most notable NFP/FOMC predictors.</p>
  </div>
  {body}
</div>"#
    );

    layout("Trader Spotlight", theme, None, &content)
}

pub fn not_found_page(theme: Theme) -> String {
    let content = r#"<div class="stack" style="text-align:center">
  <h1>404</h1>
  <p class="muted">Page not found</p>
  <p><a class="button" href="/">Return to Home</a></p>
</div>"#;
    layout("Page not found", theme, None, content)
}
