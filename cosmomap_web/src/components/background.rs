//! Starfield behind the map.

use cosmomap_core::StarfieldConfig;
use cosmomap_core::starfield::{self, Star, Streak};
use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::dom;

/// Inline style for a twinkling star.
pub fn star_style(star: &Star) -> String {
    format!(
        "top: {:.2}%; left: {:.2}%; opacity: {:.2}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
        star.top, star.left, star.opacity, star.delay_s, star.duration_s
    )
}

/// Inline style for a shooting star.
pub fn streak_style(streak: &Streak) -> String {
    format!(
        "top: {:.2}%; left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.0}s;",
        streak.top, streak.left, streak.delay_s, streak.duration_s
    )
}

#[component]
pub fn Background(config: StarfieldConfig, animate: bool) -> impl IntoView {
    let mut rng = SmallRng::seed_from_u64(dom::random_seed());
    let field = starfield::generate(&mut rng, &config);
    let class = if animate { "starfield" } else { "starfield paused" };

    view! {
        <div class=class aria-hidden="true">
            {field
                .nebulae
                .iter()
                .map(|n| {
                    view! { <div class=format!("nebula {}", n.drift.class()) style=n.style_attr()></div> }
                })
                .collect_view()}
            {field
                .large
                .iter()
                .map(|s| view! { <div class="star star-large" style=star_style(s)></div> })
                .collect_view()}
            {field
                .small
                .iter()
                .map(|s| view! { <div class="star star-small" style=star_style(s)></div> })
                .collect_view()}
            {field
                .streaks
                .iter()
                .map(|s| view! { <div class="shooting-star" style=streak_style(s)></div> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn star_style_fixes_precision() {
        let star = Star {
            top: 12.3456,
            left: 7.0,
            opacity: 0.5,
            delay_s: 1.25,
            duration_s: 4.0,
        };
        assert_eq!(
            star_style(&star),
            "top: 12.35%; left: 7.00%; opacity: 0.50; animation-delay: 1.25s; animation-duration: 4.00s;"
        );
    }

    #[test]
    fn streak_style_whole_seconds() {
        let streak = Streak {
            top: 10.0,
            left: 60.0,
            delay_s: 2.5,
            duration_s: 8.0,
        };
        assert_eq!(
            streak_style(&streak),
            "top: 10.00%; left: 60.00%; animation-delay: 2.50s; animation-duration: 8s;"
        );
    }
}
