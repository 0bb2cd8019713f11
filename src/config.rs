/// One `<link>` hint to append to `<head>`: relation, target URL and the
/// optional `as` type preload wants.
pub type ResourceHint = (&'static str, &'static str, Option<&'static str>);

/// Hints for the origins the page pulls third-party assets from.
pub const DEFAULT_RESOURCE_HINTS: &[ResourceHint] = &[
    ("preconnect", "https://teachablemachine.withgoogle.com", None),
    ("preconnect", "https://cdnjs.cloudflare.com", None),
    (
        "preload",
        "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css",
        Some("style"),
    ),
];

/// Tunable knobs for everything wired onto the page. The defaults match the
/// production markup; embedders with different ids or thresholds build their
/// own value and hand it to [`crate::Site::mount`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Name of the consent cookie.
    pub cookie_name: String,
    /// How long a saved consent decision is kept, in days.
    pub consent_ttl_days: f64,
    /// Google Analytics measurement id pushed once consent allows it.
    pub ga_measurement_id: String,
    /// Image swapped in when a lazily loaded source fails.
    pub placeholder_image: String,
    /// Vertical scroll offset (px) past which the back-to-top control shows.
    pub back_to_top_offset: f64,
    /// Visibility ratio that triggers an entrance animation.
    pub animation_threshold: f64,
    /// Margin widening the animation viewport, CSS margin syntax.
    pub animation_root_margin: String,
    /// Visibility ratio that reveals a timeline entry.
    pub timeline_threshold: f64,
    /// `<link>` hints appended to `<head>` after the page load settles.
    pub resource_hints: &'static [ResourceHint],
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            cookie_name: "cookieConsent".to_string(),
            consent_ttl_days: 365.0,
            ga_measurement_id: "GA_MEASUREMENT_ID".to_string(),
            placeholder_image: "assets/images/placeholder-image.jpg".to_string(),
            back_to_top_offset: 300.0,
            animation_threshold: 0.2,
            animation_root_margin: "50px".to_string(),
            timeline_threshold: 0.3,
            resource_hints: DEFAULT_RESOURCE_HINTS,
        }
    }
}
