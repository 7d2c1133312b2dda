use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BarColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
}

impl BarColor {
    fn hex(&self) -> &'static str {
        match self {
            BarColor::Blue => "#3b82f6",
            BarColor::Green => "#22c55e",
            BarColor::Red => "#ef4444",
            BarColor::Yellow => "#eab308",
            BarColor::Purple => "#a855f7",
        }
    }
}

/// Fill percentage clamped to 0..=100. A non-positive `max` yields 0.
pub fn fill_percentage(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn ProgressBar(
    value: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] color: BarColor,
) -> impl IntoView {
    let pct = fill_percentage(value, max);

    view! {
        <div style="width: 100%;">
            {label.map(|label| view! {
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px; font-size: 13px;">
                    <span style="color: #334155; font-weight: 500;">{label}</span>
                    <span style="color: #0f172a; font-weight: 600;">{format!("{:.0}%", pct)}</span>
                </div>
            })}
            <div style="width: 100%; height: 8px; background: #e2e8f0; border-radius: 999px; overflow: hidden;">
                <div style=format!(
                    "height: 100%; width: {:.0}%; background: {}; transition: width 0.3s;",
                    pct,
                    color.hex()
                ) />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_percentage_clamps() {
        assert_eq!(fill_percentage(150.0, 100.0), 100.0);
        assert_eq!(fill_percentage(-5.0, 100.0), 0.0);
        assert_eq!(fill_percentage(30.0, 100.0), 30.0);
    }

    #[test]
    fn test_zero_max_does_not_divide() {
        assert_eq!(fill_percentage(10.0, 0.0), 0.0);
    }
}
